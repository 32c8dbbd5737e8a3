//! Composable UI component renderers.
//!
//! Each component draws one part of the interface at an absolute row and
//! returns the next free row, so layouts read top to bottom.
//!
//! # Components
//!
//! - [`header`]: Title bar of the active view
//! - [`search`]: Query box (border, placeholder, cursor)
//! - [`filters`]: Category and sort chip bars
//! - [`table`]: Two-line wine rows with match highlighting
//! - [`empty`]: Centered empty, loading and error messages
//! - [`diary`]: Diary entries
//! - [`settings`]: Settings options
//! - [`nav`]: Bottom navigation bar
//! - [`footer`]: Notice line and keybinding hints
//!
//! # Layouts
//!
//! - [`render_catalog_view`]: Search box, filters, results line, wine list
//! - [`render_diary_view`]: Diary entries or the empty state
//! - [`render_settings_view`]: Settings options
//! - [`render_bottom_bar`]: Notice, border, navigation bar and footer,
//!   anchored to the last four rows

mod diary;
mod empty;
mod filters;
mod footer;
mod header;
mod nav;
mod search;
mod settings;
mod table;

pub use empty::render_empty_state;
pub use header::render_header;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CatalogContent, CatalogView, DiaryView, SettingsView, UIViewModel};

use diary::render_diary_rows;
use empty::{render_failure, render_loading};
use filters::render_chip_bar;
use footer::{render_footer, render_notice};
use nav::render_nav_bar;
use search::render_search_bar;
use settings::render_settings_rows;
use table::{render_results_label, render_wine_rows};

/// Rows occupied by [`render_bottom_bar`].
pub const BOTTOM_BAR_ROWS: usize = 4;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the Search tab body starting at `row`.
///
/// Layout structure:
/// ```text
/// [Search Bar - 3 lines]
/// [Category chips]
/// [Sort chips]
/// [Results line]
/// [Wine rows, 2 lines each] | [Loading / Error / Empty message]
/// ```
pub fn render_catalog_view(row: usize, view: &CatalogView, theme: &Theme, cols: usize) -> usize {
    let mut current_row = render_search_bar(row, &view.search_bar, theme, cols);
    current_row = render_chip_bar(current_row, "Type", &view.categories, theme, cols);
    current_row = render_chip_bar(current_row, "Sort", &view.sort_options, theme, cols);

    match &view.content {
        CatalogContent::List { results_label, items } => {
            current_row = render_results_label(current_row, results_label, theme, cols);
            render_wine_rows(current_row, items, theme, cols)
        }
        CatalogContent::Loading { message } => {
            render_loading(current_row, message, theme, cols);
            current_row + 1
        }
        CatalogContent::Failed { message, hint } => {
            render_failure(current_row, message, hint, theme, cols);
            current_row + 1
        }
        CatalogContent::Empty(empty) => {
            render_empty_state(current_row, empty, theme, cols);
            current_row + 1
        }
    }
}

/// Renders the Diary tab body starting at `row`.
pub fn render_diary_view(row: usize, view: &DiaryView, theme: &Theme, cols: usize) -> usize {
    if let Some(empty) = &view.empty_state {
        render_empty_state(row, empty, theme, cols);
        return row + 1;
    }
    render_diary_rows(row, &view.rows, theme, cols)
}

/// Renders the Settings tab body starting at `row`.
pub fn render_settings_view(row: usize, view: &SettingsView, theme: &Theme, cols: usize) -> usize {
    render_settings_rows(row, &view.rows, theme, cols)
}

/// Renders the notice line, a border, the navigation bar and the footer on the
/// last [`BOTTOM_BAR_ROWS`] rows of the pane.
pub fn render_bottom_bar(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let start = rows.saturating_sub(BOTTOM_BAR_ROWS - 1).max(1);

    let mut current_row = render_notice(start, vm.notice.as_deref(), theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_nav_bar(current_row, &vm.nav_bar, theme, cols);
    render_footer(current_row, &vm.footer, theme, cols);
}

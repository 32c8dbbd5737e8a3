//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the layout for the active view
//!
//! # Example
//!
//! ```rust
//! use sommelier::catalog::CatalogClient;
//! use sommelier::app::{AppState, QuerySortState};
//! use sommelier::ui::{render, Theme};
//!
//! let state = AppState::new(
//!     CatalogClient::default(),
//!     QuerySortState::default(),
//!     Theme::default(),
//! );
//! render(&state, 24, 80);
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, UIViewModel};

/// First row used for content; row 1 stays blank.
const TOP_ROW: usize = 2;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output using absolute cursor positioning. Does not clear
/// the screen.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a view model.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Body of the active view]
/// [Notice]
/// [Border]
/// [Navigation bar]
/// [Footer]
/// ```
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = components::render_header(TOP_ROW, &vm.header, theme, cols);
    current_row = components::render_border(current_row, &theme.colors.border, cols);

    match &vm.body {
        BodyView::Catalog(view) => components::render_catalog_view(current_row, view, theme, cols),
        BodyView::Diary(view) => components::render_diary_view(current_row, view, theme, cols),
        BodyView::Settings(view) => components::render_settings_view(current_row, view, theme, cols),
    };

    components::render_bottom_bar(vm, theme, rows, cols);
}

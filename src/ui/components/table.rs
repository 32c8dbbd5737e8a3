//! Wine list renderer.
//!
//! Each wine takes two lines: the name (with query matches highlighted) and
//! the rating on the first, producer and origin dimmed on the second.

use crate::ui::helpers::{self, char_len, position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Left indent of every row; the selected row shows a marker here.
const ROW_INDENT: usize = 2;

/// Renders the "N wines found" line above the list.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_results_label(row: usize, label: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("  {label}");
    print!("{}", " ".repeat(cols.saturating_sub(char_len(label) + 2)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all wine rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + 2 per item)
pub fn render_wine_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_wine_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one wine over two lines.
///
/// # Layout
///
/// ```text
/// ▌ Wine name (highlighted)                      ★ 4.5 (120)
///   Winery · Location
/// ```
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Match highlights (unless selected)
/// 3. Normal text color
///
/// Both lines are padded to the full width so the selection background
/// covers the whole item.
fn render_wine_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let line_style = || {
        if item.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
    };

    position_cursor(row, 1);
    line_style();
    print!("{}", if item.is_selected { "▌ " } else { "  " });

    helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_selected);

    let used = ROW_INDENT + char_len(&item.name);
    let rating_len = char_len(&item.rating);
    print!("{}", " ".repeat(cols.saturating_sub(used + rating_len + 1)));
    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.rating_fg));
    }
    if used + rating_len + 1 <= cols {
        print!("{} ", item.rating);
    }
    print!("{}", Theme::reset());

    let subtitle = truncate_chars(&item.subtitle, cols.saturating_sub(ROW_INDENT + 1));
    position_cursor(row + 1, 1);
    line_style();
    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}{subtitle}", " ".repeat(ROW_INDENT));
    print!("{}", " ".repeat(cols.saturating_sub(ROW_INDENT + char_len(&subtitle))));
    print!("{}", Theme::reset());

    row + 2
}

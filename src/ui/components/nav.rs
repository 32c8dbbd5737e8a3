//! Bottom navigation bar.

use crate::ui::helpers::{char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NavItem;

/// Renders one evenly spaced slot per tab, the active tab in the accent color.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_nav_bar(row: usize, items: &[NavItem], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    if items.is_empty() {
        print!("{}", " ".repeat(cols));
        return row + 1;
    }

    let slot = cols / items.len();
    let mut used = 0;

    for item in items {
        let text = format!("{} {}", item.icon.glyph(), item.label);
        let len = char_len(&text);
        let left = slot.saturating_sub(len) / 2;
        let right = slot.saturating_sub(len + left);

        print!("{}", " ".repeat(left));
        if item.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.accent));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{text}");
        print!("{}", Theme::reset());
        print!("{}", " ".repeat(right));

        used += left + len + right;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}

//! Footer component renderer.
//!
//! Renders the keybinding hint line and the transient notice line above the
//! navigation bar.

use crate::ui::helpers::{char_len, position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// Keybinding hints are centered with dimmed styling and truncated on narrow
/// terminals to prevent layout corruption.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate_chars(&footer.keybindings, cols);

    let text_len = char_len(&help_text);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a one-line notice in the accent color, or a blank line.
pub fn render_notice(row: usize, notice: Option<&str>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let Some(notice) = notice else {
        print!("{}", " ".repeat(cols));
        return row + 1;
    };

    let text = truncate_chars(notice, cols.saturating_sub(2));
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.accent));
    print!(" {text}");
    print!("{}", " ".repeat(cols.saturating_sub(char_len(&text) + 1)));
    print!("{}", Theme::reset());
    row + 1
}

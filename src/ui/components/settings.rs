//! Settings list renderer.

use crate::ui::helpers::{char_len, position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SettingsRow;

/// Renders settings options as a title line and a dimmed description line.
///
/// # Returns
///
/// The next available row position (row + 2 per option)
pub fn render_settings_rows(row: usize, options: &[SettingsRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;

    for option in options {
        let title = truncate_chars(&option.title, cols.saturating_sub(4));
        let subtitle = truncate_chars(&option.subtitle, cols.saturating_sub(4));

        position_cursor(current_row, 1);
        if option.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
            print!("▌ ");
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("  ");
        }
        print!("{title}");
        print!("{}", " ".repeat(cols.saturating_sub(2 + char_len(&title))));
        print!("{}", Theme::reset());

        position_cursor(current_row + 1, 1);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("    {subtitle}");
        print!("{}", " ".repeat(cols.saturating_sub(4 + char_len(&subtitle))));
        print!("{}", Theme::reset());

        current_row += 2;
    }

    current_row
}

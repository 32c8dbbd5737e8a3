//! Category and sort bars.

use crate::ui::helpers::{char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ChipItem;

/// Renders a labelled row of chips; the active chip is drawn inverted.
///
/// Chips that do not fit the width are dropped from the right.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_chip_bar(row: usize, label: &str, chips: &[ChipItem], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("  {label} ");
    let mut used = char_len(label) + 3;

    for chip in chips {
        let width = char_len(&chip.label) + 3;
        if used + width > cols {
            break;
        }

        if chip.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.chip_active_fg));
            print!("{}", Theme::bg(&theme.colors.chip_active_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!(" {} ", chip.label);
        print!("{}", Theme::reset());
        print!(" ");
        used += width;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}

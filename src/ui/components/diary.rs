//! Diary entry renderer.

use crate::ui::helpers::{char_len, position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DiaryRow;

/// Renders diary entries, four lines each: date and wine, up to two lines of
/// note text, and a spacer.
///
/// # Returns
///
/// The next available row position
pub fn render_diary_rows(row: usize, entries: &[DiaryRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for entry in entries {
        current_row = render_diary_row(current_row, entry, theme, cols);
    }
    current_row
}

fn render_diary_row(row: usize, entry: &DiaryRow, theme: &Theme, cols: usize) -> usize {
    let width = cols.saturating_sub(4);
    let marker = if entry.is_selected { "▌ " } else { "  " };

    position_cursor(row, 1);
    if entry.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    }
    print!("{marker}");
    print!("{}", Theme::bold());
    if !entry.is_selected {
        print!("{}", Theme::fg(&theme.colors.accent));
    }
    print!("{}", entry.date);
    print!("{}", Theme::reset());

    let name = truncate_chars(&entry.wine_name, width.saturating_sub(char_len(&entry.date) + 3));
    if entry.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!(" · {name}");
    let used = 2 + char_len(&entry.date) + 3 + char_len(&name);
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());

    let chars: Vec<char> = entry.content.chars().collect();
    let mut lines = chars.chunks(width.max(1));
    for offset in 1..=2 {
        let line: String = lines.next().map(|chunk| chunk.iter().collect()).unwrap_or_default();
        position_cursor(row + offset, 1);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("    {line}");
        print!("{}", " ".repeat(cols.saturating_sub(4 + char_len(&line))));
        print!("{}", Theme::reset());
    }

    position_cursor(row + 3, 1);
    print!("{}", " ".repeat(cols));

    row + 4
}

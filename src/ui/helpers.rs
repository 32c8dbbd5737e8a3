//! Shared rendering utilities and helpers.
//!
//! Low-level text helpers used across UI components. Everything here works on
//! character indices, never byte indices, since wine names and locations are
//! routinely non-ASCII ("Rosé", "Côtes du Rhône").
//!
//! # Example
//!
//! ```rust
//! use sommelier::ui::helpers::truncate_chars;
//!
//! assert_eq!(truncate_chars("Châteauneuf-du-Pape", 10), "Château...");
//! ```

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens `text` to at most `max` characters, ending in `...` when cut.
///
/// Widths of 3 or less cut without the ellipsis.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }

    let mut truncated: String = text.chars().take(max - 3).collect();
    truncated.push_str("...");
    truncated
}

/// Number of characters in `text`, used for padding calculations.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Renders text with highlighted character ranges for query matches.
///
/// Ranges are `(start, end)` character indices with exclusive end, sorted and
/// non-overlapping. Ranges past the end of `text` are clipped.
///
/// When `is_selected` is `true`, match highlighting is disabled to avoid
/// conflicting with the selection background.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_chars("Rosé", 4), "Rosé");
        assert_eq!(truncate_chars("Côtes du Rhône", 8), "Côtes...");
        assert_eq!(truncate_chars("Barolo", 2), "Ba");
        assert_eq!(truncate_chars("Barolo", 0), "");
    }
}

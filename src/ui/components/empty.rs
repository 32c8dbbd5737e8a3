//! Centered status messages.
//!
//! Renders the empty state of a list and the loading and error placeholders
//! that stand in for the wine list.

use crate::ui::helpers::{char_len, position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Number of blank lines between the top of the body and a centered message.
const MESSAGE_OFFSET: usize = 2;

fn render_centered(row: usize, text: &str, style: &str, cols: usize) {
    let text = truncate_chars(text, cols);
    let len = char_len(&text);
    let padding = (cols.saturating_sub(len)) / 2;

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}

/// Renders the empty state message.
///
/// Displays a centered two-line message a few lines below `row`. The message
/// uses the `empty_state_fg` theme color and the subtitle uses `text_dim` with
/// dim styling. An empty subtitle is skipped.
///
/// # Example
///
/// ```rust
/// use sommelier::ui::components::render_empty_state;
/// use sommelier::ui::viewmodel::EmptyState;
/// use sommelier::ui::Theme;
///
/// let empty = EmptyState {
///     message: "No results".to_string(),
///     subtitle: "Try a different search term".to_string(),
/// };
/// render_empty_state(4, &empty, &Theme::default(), 80);
/// ```
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let row = row + MESSAGE_OFFSET;
    render_centered(row, &empty.message, &Theme::fg(&theme.colors.empty_state_fg), cols);

    if !empty.subtitle.is_empty() {
        let style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        render_centered(row + 1, &empty.subtitle, &style, cols);
    }
}

/// Renders the placeholder shown while the catalog is loading.
pub fn render_loading(row: usize, message: &str, theme: &Theme, cols: usize) {
    render_centered(row + MESSAGE_OFFSET, message, &Theme::fg(&theme.colors.accent), cols);
}

/// Renders a failed load with the retry hint beneath it.
pub fn render_failure(row: usize, message: &str, hint: &str, theme: &Theme, cols: usize) {
    let row = row + MESSAGE_OFFSET;
    let style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.error_fg));
    render_centered(row, message, &style, cols);
    render_centered(row + 1, hint, &Theme::fg(&theme.colors.text_dim), cols);
}

//! Input mode state types for the application.
//!
//! The input mode decides how keys are interpreted on the Search tab:
//! - **Normal**: navigation and commands (category, sort, tabs, retry)
//! - **Search**: typing into the query box, or navigating the filtered results
//!
//! The Diary and Settings tabs always use `Normal`.
//!
//! # Example
//!
//! ```rust
//! use sommelier::app::modes::{InputMode, SearchFocus};
//!
//! let input_mode = InputMode::Search(SearchFocus::Typing);
//! assert!(input_mode.is_typing());
//! ```

/// Focus state within search mode.
///
/// Determines whether the query is being typed or the results are being
/// navigated. Controls which keybindings are active during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search box.
    ///
    /// Accepts character input, backspace, `Ctrl+u` and enter (to switch to
    /// Navigating).
    Typing,

    /// User is navigating through the filtered wine list.
    ///
    /// Accepts j/k for movement and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), / (search), h/l (category),
    /// s (sort), r (retry), 1/2/3 or Tab (switch view), q (quit).
    #[default]
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),
}

impl InputMode {
    /// Returns `true` while characters go into the query.
    #[must_use]
    pub const fn is_typing(self) -> bool {
        matches!(self, Self::Search(SearchFocus::Typing))
    }
}

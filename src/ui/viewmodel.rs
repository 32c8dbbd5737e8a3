//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain
//! no business logic, only display-ready data: the wine list inside a
//! [`CatalogView`] is already filtered, sorted, windowed and highlighted.
//!
//! # Example
//!
//! ```rust
//! use sommelier::ui::viewmodel::{EmptyState, FooterInfo, HeaderInfo, BodyView, DiaryView, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: "Wine Diary".to_string() },
//!     body: BodyView::Diary(DiaryView {
//!         rows: vec![],
//!         empty_state: Some(EmptyState {
//!             message: "No diary entries yet".to_string(),
//!             subtitle: "Record how today's wine tasted".to_string(),
//!         }),
//!     }),
//!     nav_bar: vec![],
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     notice: None,
//! };
//! assert!(vm.notice.is_none());
//! ```

use crate::app::router::NavIcon;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    /// Title bar for the active view.
    pub header: HeaderInfo,

    /// Content of the active view.
    pub body: BodyView,

    /// Bottom navigation bar, one entry per tab.
    pub nav_bar: Vec<NavItem>,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Transient one-line message (e.g., an unavailable action).
    pub notice: Option<String>,
}

/// Per-view content.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyView {
    Catalog(CatalogView),
    Diary(DiaryView),
    Settings(SettingsView),
}

/// The Search tab: query box, filters and the wine list or its status.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub search_bar: SearchBarInfo,
    /// One chip per category, in display order.
    pub categories: Vec<ChipItem>,
    /// One chip per sort key.
    pub sort_options: Vec<ChipItem>,
    pub content: CatalogContent,
}

/// What the Search tab shows below its filters.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogContent {
    /// A request is in flight (or has not been issued yet).
    Loading { message: String },

    /// The last request failed; `hint` tells how to retry.
    Failed { message: String, hint: String },

    /// Loaded, but nothing to show.
    Empty(EmptyState),

    /// Loaded list window.
    List {
        /// "N wines found".
        results_label: String,
        /// Rows in the visible window.
        items: Vec<DisplayItem>,
    },
}

/// Display information for a single wine row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Wine name, truncated to fit.
    pub name: String,

    /// Producer and origin, e.g. "Bodega Muga · Rioja".
    pub subtitle: String,

    /// Formatted rating, e.g. `★ 4.5 (120)`.
    pub rating: String,

    /// Whether this item is currently selected.
    pub is_selected: bool,

    /// Character ranges of query matches in `name`.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// A selectable option in a horizontal bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipItem {
    pub label: String,
    pub is_active: bool,
}

/// The Diary tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryView {
    pub rows: Vec<DiaryRow>,
    /// Set when there are no entries.
    pub empty_state: Option<EmptyState>,
}

/// One diary entry as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryRow {
    pub date: String,
    pub wine_name: String,
    /// Note text, truncated to two lines worth of the terminal width.
    pub content: String,
    pub is_selected: bool,
}

/// The Settings tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsView {
    pub rows: Vec<SettingsRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsRow {
    pub title: String,
    pub subtitle: String,
    pub is_selected: bool,
}

/// One entry of the bottom navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub icon: NavIcon,
    pub is_active: bool,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
///
/// Contains help text and keybinding hints for the bottom of the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "q: quit  /: search").
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No results").
    pub message: String,

    /// Secondary explanatory text. May be empty.
    pub subtitle: String,
}

/// Search box display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,

    /// Shown in place of an empty query.
    pub placeholder: String,

    /// Whether keystrokes currently go into the box.
    pub is_focused: bool,
}

//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for all transient UI state. It is
//! mutated only by the event handler. Derived data is never stored: the wine
//! list on screen is recomputed from the loaded items and [`QuerySortState`]
//! every time it is needed, so it cannot drift from the category or query
//! that produced it.
//!
//! # State Components
//!
//! - **Router**: Which top-level view is active
//! - **Query/sort**: Free-text query, sort key and category
//! - **Loader**: Load lifecycle of the active category
//! - **Diary**: Last diary snapshot delivered by the worker
//! - **Selection**: Cursor within the active view's list
//! - **Input Mode**: Controls keybinding interpretation on the Search tab
//!
//! # Example
//!
//! ```rust
//! use sommelier::app::AppState;
//! use sommelier::app::state::QuerySortState;
//! use sommelier::catalog::CatalogClient;
//! use sommelier::ui::Theme;
//!
//! let state = AppState::new(CatalogClient::default(), QuerySortState::default(), Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.nav_bar.len(), 3);
//! ```

use super::modes::{InputMode, SearchFocus};
use super::pipeline;
use super::router::{Tab, TabRouter};
use crate::catalog::{CatalogClient, CatalogRequest, LoadController, LoadState};
use crate::domain::{Category, DiaryEntry, SortKey, WineItem};
use crate::ui::helpers::truncate_chars;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyView, CatalogContent, CatalogView, ChipItem, DiaryRow, DiaryView, DisplayItem, EmptyState,
    FooterInfo, HeaderInfo, NavItem, SearchBarInfo, SettingsRow, SettingsView, UIViewModel,
};

/// Placeholder shown in an empty search box.
pub const SEARCH_PLACEHOLDER: &str = "Search wine, winery, region";

/// Notice shown when the user asks to write a diary entry.
pub const DIARY_WRITE_NOTICE: &str = "Writing diary entries is not implemented yet";

const LOADING_MESSAGE: &str = "Loading wines...";
const WAITING_MESSAGE: &str = "Waiting for web access permission...";
const RETRY_HINT: &str = "Press r to retry";

/// Rows taken by everything but the wine list on the Search tab.
///
/// Blank line, header, border, search box (3), category bar, sort bar, results
/// label, notice, border, navigation bar, footer.
const CATALOG_CHROME_ROWS: usize = 13;
/// Blank line, header, border, notice, border, navigation bar, footer.
const PLAIN_CHROME_ROWS: usize = 7;

const WINE_ROW_HEIGHT: usize = 2;
const DIARY_ROW_HEIGHT: usize = 4;
const SETTINGS_ROW_HEIGHT: usize = 2;

/// One entry of the static settings list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsOption {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// The settings list. Purely informational; nothing here is persisted.
pub const SETTINGS_OPTIONS: [SettingsOption; 7] = [
    SettingsOption {
        id: "profile",
        title: "Profile",
        subtitle: "Personal details and taste preferences",
    },
    SettingsOption {
        id: "notifications",
        title: "Notifications",
        subtitle: "Manage notifications",
    },
    SettingsOption {
        id: "appearance",
        title: "Theme",
        subtitle: "Design and colors",
    },
    SettingsOption {
        id: "language",
        title: "Language",
        subtitle: "English",
    },
    SettingsOption {
        id: "privacy",
        title: "Privacy",
        subtitle: "Personal data settings",
    },
    SettingsOption {
        id: "help",
        title: "Help",
        subtitle: "FAQ and contact",
    },
    SettingsOption {
        id: "about",
        title: "About",
        subtitle: concat!("Version ", env!("CARGO_PKG_VERSION")),
    },
];

/// Live query, sort and category selection. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuerySortState {
    /// Free-text query typed into the search box.
    pub query: String,
    /// Field the list is sorted by, descending.
    pub sort_key: SortKey,
    /// Category whose items are shown.
    pub category: Category,
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Active top-level view.
    pub router: TabRouter,

    /// Query, sort key and category of the Search tab.
    pub query: QuerySortState,

    /// Load lifecycle of the active category.
    pub loader: LoadController,

    /// Builds catalog requests for the loader's tickets.
    pub client: CatalogClient,

    /// Diary entries as last delivered by the worker.
    pub diary: Vec<DiaryEntry>,

    /// Transient one-line message, cleared by the next key press.
    pub notice: Option<String>,

    /// Zero-based cursor within the active view's list.
    ///
    /// Clamped to the list length whenever the list can shrink.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Whether the host granted web access. No request is built before that.
    pub web_access: bool,
}

impl AppState {
    /// Creates the initial state. Nothing is loading until
    /// [`start_loading`](Self::start_loading) is called.
    #[must_use]
    pub fn new(client: CatalogClient, query: QuerySortState, theme: Theme) -> Self {
        let loader = LoadController::new(query.category);
        Self {
            router: TabRouter::new(),
            query,
            loader,
            client,
            diary: vec![],
            notice: None,
            selected_index: 0,
            input_mode: InputMode::Normal,
            theme,
            web_access: false,
        }
    }

    /// Returns the active tab.
    #[must_use]
    pub const fn active_tab(&self) -> Tab {
        self.router.active()
    }

    /// Projects the loaded items through the current query and sort key.
    #[must_use]
    pub fn visible_wines(&self) -> Vec<WineItem> {
        pipeline::project(self.loader.items(), &self.query.query, self.query.sort_key)
    }

    /// Number of selectable rows in the active view.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        match self.active_tab() {
            Tab::Search => self.visible_wines().len(),
            Tab::Diary => self.diary.len(),
            Tab::Settings => SETTINGS_OPTIONS.len(),
        }
    }

    /// Moves the cursor down by one row, stopping at the last row.
    pub fn move_selection_down(&mut self) -> bool {
        let len = self.visible_len();
        if self.selected_index + 1 >= len {
            return false;
        }
        self.selected_index += 1;
        true
    }

    /// Moves the cursor up by one row, stopping at the first row.
    pub fn move_selection_up(&mut self) -> bool {
        if self.selected_index == 0 {
            return false;
        }
        self.selected_index -= 1;
        true
    }

    /// Pulls the cursor back inside the active list.
    pub fn clamp_selection(&mut self) {
        let len = self.visible_len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    /// Switches the active view. Returns `true` if it changed.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if !self.router.select(tab) {
            return false;
        }
        self.selected_index = 0;
        self.input_mode = InputMode::Normal;
        true
    }

    /// Records the web access grant and loads the selected category.
    ///
    /// Returns `None` if a load was already started.
    pub fn start_loading(&mut self) -> Option<CatalogRequest> {
        self.web_access = true;
        if *self.loader.state() != LoadState::Idle {
            return None;
        }
        self.change_category(self.query.category)
    }

    /// Switches to `category`, superseding any outstanding request.
    ///
    /// Without web access only the selection moves and the loader stays idle;
    /// the grant then loads whatever category is selected.
    pub fn change_category(&mut self, category: Category) -> Option<CatalogRequest> {
        self.query.category = category;
        self.selected_index = 0;
        if !self.web_access {
            tracing::debug!(category = category.id(), "category selected before web access");
            self.loader = LoadController::new(category);
            return None;
        }
        let ticket = self.loader.set_category(category);
        Some(self.client.request(ticket))
    }

    /// Reloads the active category after a failure.
    pub fn retry(&mut self) -> Option<CatalogRequest> {
        let ticket = self.loader.retry()?;
        self.selected_index = 0;
        Some(self.client.request(ticket))
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// The list of the active view is windowed around the cursor so the selected
    /// row is always visible.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let tab = self.active_tab();
        let body = match tab {
            Tab::Search => BodyView::Catalog(self.compute_catalog_view(rows, cols)),
            Tab::Diary => BodyView::Diary(self.compute_diary_view(rows, cols)),
            Tab::Settings => BodyView::Settings(self.compute_settings_view(rows)),
        };

        UIViewModel {
            header: HeaderInfo {
                title: Self::title_for(tab).to_string(),
            },
            body,
            nav_bar: self.compute_nav_bar(),
            footer: self.compute_footer(),
            notice: self.notice.clone(),
        }
    }

    const fn title_for(tab: Tab) -> &'static str {
        match tab {
            Tab::Search => "Explore Wines",
            Tab::Diary => "Wine Diary",
            Tab::Settings => "Settings",
        }
    }

    fn compute_catalog_view(&self, rows: usize, cols: usize) -> CatalogView {
        let categories = Category::ALL
            .iter()
            .map(|category| ChipItem {
                label: format!("{} {}", category.glyph(), category.label()),
                is_active: *category == self.query.category,
            })
            .collect();

        let sort_options = SortKey::ALL
            .iter()
            .map(|key| ChipItem {
                label: key.label().to_string(),
                is_active: *key == self.query.sort_key,
            })
            .collect();

        CatalogView {
            search_bar: SearchBarInfo {
                query: self.query.query.clone(),
                placeholder: SEARCH_PLACEHOLDER.to_string(),
                is_focused: self.input_mode.is_typing(),
            },
            categories,
            sort_options,
            content: self.compute_catalog_content(rows, cols),
        }
    }

    fn compute_catalog_content(&self, rows: usize, cols: usize) -> CatalogContent {
        match self.loader.state() {
            LoadState::Idle => CatalogContent::Loading {
                message: WAITING_MESSAGE.to_string(),
            },
            LoadState::Loading => CatalogContent::Loading {
                message: LOADING_MESSAGE.to_string(),
            },
            LoadState::Failed(message) => CatalogContent::Failed {
                message: message.clone(),
                hint: RETRY_HINT.to_string(),
            },
            LoadState::Loaded(_) => {
                let wines = self.visible_wines();

                if wines.is_empty() {
                    let empty = if self.query.query.is_empty() {
                        EmptyState {
                            message: "No wines in this category".to_string(),
                            subtitle: String::new(),
                        }
                    } else {
                        EmptyState {
                            message: "No results".to_string(),
                            subtitle: "Try a different search term".to_string(),
                        }
                    };
                    return CatalogContent::Empty(empty);
                }

                let capacity = rows.saturating_sub(CATALOG_CHROME_ROWS) / WINE_ROW_HEIGHT;
                let (start, end) = visible_window(wines.len(), self.selected_index, capacity);
                let name_width = cols.saturating_sub(20);

                let items = wines[start..end]
                    .iter()
                    .enumerate()
                    .map(|(offset, wine)| self.compute_display_item(wine, start + offset, name_width))
                    .collect();

                CatalogContent::List {
                    results_label: format!("{} wines found", wines.len()),
                    items,
                }
            }
        }
    }

    fn compute_display_item(&self, wine: &WineItem, absolute_idx: usize, name_width: usize) -> DisplayItem {
        let name = truncate_chars(&wine.wine, name_width);
        let highlight_ranges = pipeline::match_ranges(&name, &self.query.query);

        let subtitle = if wine.location.is_empty() {
            wine.winery.clone()
        } else {
            format!("{} · {}", wine.winery, wine.location)
        };

        DisplayItem {
            name,
            subtitle,
            rating: wine.rating_label(),
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    fn compute_diary_view(&self, rows: usize, cols: usize) -> DiaryView {
        if self.diary.is_empty() {
            return DiaryView {
                rows: vec![],
                empty_state: Some(EmptyState {
                    message: "No diary entries yet".to_string(),
                    subtitle: "Record how today's wine tasted".to_string(),
                }),
            };
        }

        let capacity = rows.saturating_sub(PLAIN_CHROME_ROWS) / DIARY_ROW_HEIGHT;
        let (start, end) = visible_window(self.diary.len(), self.selected_index, capacity);
        let content_width = cols.saturating_sub(4) * 2;

        let rows = self.diary[start..end]
            .iter()
            .enumerate()
            .map(|(offset, entry)| DiaryRow {
                date: entry.display_date(),
                wine_name: entry.wine_name.clone(),
                content: truncate_chars(&entry.content, content_width),
                is_selected: start + offset == self.selected_index,
            })
            .collect();

        DiaryView {
            rows,
            empty_state: None,
        }
    }

    fn compute_settings_view(&self, rows: usize) -> SettingsView {
        let capacity = rows.saturating_sub(PLAIN_CHROME_ROWS) / SETTINGS_ROW_HEIGHT;
        let (start, end) = visible_window(SETTINGS_OPTIONS.len(), self.selected_index, capacity);

        SettingsView {
            rows: SETTINGS_OPTIONS[start..end]
                .iter()
                .enumerate()
                .map(|(offset, option)| SettingsRow {
                    title: option.title.to_string(),
                    subtitle: option.subtitle.to_string(),
                    is_selected: start + offset == self.selected_index,
                })
                .collect(),
        }
    }

    fn compute_nav_bar(&self) -> Vec<NavItem> {
        let active = self.active_tab();
        Tab::ALL
            .iter()
            .map(|tab| NavItem {
                label: format!("{} {}", tab.shortcut(), tab.label()),
                icon: tab.icon(*tab == active),
                is_active: *tab == active,
            })
            .collect()
    }

    /// Computes footer keybindings text based on the active view and input mode.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.active_tab(), self.input_mode) {
            (Tab::Search, InputMode::Search(SearchFocus::Typing)) => {
                "ESC: clear  Enter: results  Ctrl+u: clear query  Ctrl+n/p: navigate".to_string()
            }
            (Tab::Search, InputMode::Search(SearchFocus::Navigating)) => {
                "ESC: exit search  /: edit query  j/k: navigate  s: sort".to_string()
            }
            (Tab::Search, InputMode::Normal) => {
                if matches!(self.loader.state(), LoadState::Failed(_)) {
                    "r: retry  h/l: category  Tab: next view  q: quit".to_string()
                } else {
                    "j/k: navigate  /: search  h/l: category  s: sort  Tab: next view  q: quit"
                        .to_string()
                }
            }
            (Tab::Diary, _) => "j/k: navigate  a: new entry  Tab: next view  q: quit".to_string(),
            (Tab::Settings, _) => "j/k: navigate  Tab: next view  q: quit".to_string(),
        };

        FooterInfo { keybindings }
    }
}

/// Returns the `[start, end)` window of `len` rows that fits `capacity` rows and
/// keeps `selected` visible, centered when possible.
///
/// A zero capacity still shows the selected row.
fn visible_window(len: usize, selected: usize, capacity: usize) -> (usize, usize) {
    let capacity = capacity.max(1);
    if len <= capacity {
        return (0, len);
    }

    let selected = selected.min(len - 1);
    let start = selected.saturating_sub(capacity / 2).min(len - capacity);
    (start, start + capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FetchTicket;
    use crate::domain::Rating;

    fn wine(id: i64, name: &str, average: &str) -> WineItem {
        WineItem {
            id,
            wine: name.to_string(),
            winery: "Winery".to_string(),
            rating: Rating {
                average: average.to_string(),
                reviews: "10".to_string(),
            },
            location: "Tuscany".to_string(),
            image: String::new(),
        }
    }

    fn loaded_state(items: Vec<WineItem>) -> AppState {
        let mut state = AppState::new(
            CatalogClient::default(),
            QuerySortState::default(),
            Theme::default(),
        );
        let _ = state.start_loading();
        let ticket = FetchTicket {
            category: state.loader.category(),
            generation: state.loader.generation(),
        };
        state.loader.resolve(ticket, Ok(items));
        state
    }

    #[test]
    fn window_centers_selection() {
        assert_eq!(visible_window(3, 0, 10), (0, 3));
        assert_eq!(visible_window(20, 10, 5), (8, 13));
        assert_eq!(visible_window(20, 19, 5), (15, 20));
        assert_eq!(visible_window(20, 0, 0), (0, 1));
    }

    #[test]
    fn category_change_without_web_access_stays_idle() {
        let mut state = AppState::new(
            CatalogClient::default(),
            QuerySortState::default(),
            Theme::default(),
        );
        assert!(state.change_category(Category::Port).is_none());
        assert_eq!(state.loader.state(), &LoadState::Idle);
        assert_eq!(state.loader.category(), Category::Port);

        let request = state.start_loading().expect("grant starts the load");
        assert!(request.url.ends_with("/port"));
        assert!(state.change_category(Category::Rose).is_some());
    }

    #[test]
    fn start_loading_only_once() {
        let mut state = AppState::new(
            CatalogClient::default(),
            QuerySortState::default(),
            Theme::default(),
        );
        assert!(state.start_loading().is_some());
        assert!(state.start_loading().is_none());
    }

    #[test]
    fn list_is_projected_on_every_view() {
        let mut state = loaded_state(vec![
            wine(1, "Chianti", "4.1"),
            wine(2, "Brunello", "4.7"),
        ]);

        let names = |state: &AppState| -> Vec<String> {
            match state.compute_viewmodel(40, 80).body {
                BodyView::Catalog(CatalogView {
                    content: CatalogContent::List { items, .. },
                    ..
                }) => items.into_iter().map(|item| item.name).collect(),
                other => panic!("expected list, got {other:?}"),
            }
        };

        assert_eq!(names(&state), vec!["Brunello", "Chianti"]);

        state.query.query = "chi".to_string();
        assert_eq!(names(&state), vec!["Chianti"]);
    }

    #[test]
    fn results_label_counts_matches() {
        let state = loaded_state(vec![wine(1, "A", "4.0"), wine(2, "B", "3.0")]);
        match state.compute_viewmodel(40, 80).body {
            BodyView::Catalog(view) => match view.content {
                CatalogContent::List { results_label, .. } => {
                    assert_eq!(results_label, "2 wines found");
                }
                other => panic!("expected list, got {other:?}"),
            },
            other => panic!("expected catalog, got {other:?}"),
        }
    }

    #[test]
    fn empty_states_depend_on_query() {
        let mut state = loaded_state(vec![]);
        let content = |state: &AppState| match state.compute_viewmodel(40, 80).body {
            BodyView::Catalog(view) => view.content,
            other => panic!("expected catalog, got {other:?}"),
        };

        match content(&state) {
            CatalogContent::Empty(empty) => assert_eq!(empty.message, "No wines in this category"),
            other => panic!("expected empty, got {other:?}"),
        }

        state.query.query = "zzz".to_string();
        match content(&state) {
            CatalogContent::Empty(empty) => {
                assert_eq!(empty.message, "No results");
                assert_eq!(empty.subtitle, "Try a different search term");
            }
            other => panic!("expected empty, got {other:?}"),
        }
    }

    #[test]
    fn selection_is_clamped() {
        let mut state = loaded_state(vec![wine(1, "A", "4.0"), wine(2, "B", "3.0")]);
        assert!(state.move_selection_down());
        assert!(!state.move_selection_down());
        assert_eq!(state.selected_index, 1);

        state.query.query = "b".to_string();
        state.clamp_selection();
        assert_eq!(state.selected_index, 0);
        assert!(!state.move_selection_up());
    }

    #[test]
    fn diary_view_shows_empty_state() {
        let mut state = loaded_state(vec![]);
        state.select_tab(Tab::Diary);
        match state.compute_viewmodel(40, 80).body {
            BodyView::Diary(view) => {
                assert!(view.rows.is_empty());
                assert_eq!(
                    view.empty_state.map(|e| e.message).as_deref(),
                    Some("No diary entries yet")
                );
            }
            other => panic!("expected diary, got {other:?}"),
        }
    }

    #[test]
    fn settings_lists_every_option_with_version() {
        let mut state = loaded_state(vec![]);
        state.select_tab(Tab::Settings);
        match state.compute_viewmodel(40, 80).body {
            BodyView::Settings(view) => {
                assert_eq!(view.rows.len(), 7);
                assert_eq!(
                    view.rows[6].subtitle,
                    format!("Version {}", env!("CARGO_PKG_VERSION"))
                );
            }
            other => panic!("expected settings, got {other:?}"),
        }
    }

    #[test]
    fn nav_bar_marks_active_tab() {
        let mut state = loaded_state(vec![]);
        state.select_tab(Tab::Settings);
        let active: Vec<bool> = state
            .compute_viewmodel(40, 80)
            .nav_bar
            .iter()
            .map(|item| item.is_active)
            .collect();
        assert_eq!(active, vec![false, false, true]);
    }
}

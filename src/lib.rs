//! Sommelier: a Zellij plugin for browsing a wine catalog.
//!
//! Sommelier fetches wines for one of six categories from a public HTTP
//! endpoint and lets the user:
//! - Narrow the list with a live, case-insensitive text query
//! - Sort it by average rating or by review count
//! - Keep a tasting diary persisted on the worker thread
//! - Browse a static settings list

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Host calls
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, tab routing                      │
//! │  - Search / sort projection                         │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog       │   │ Worker Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Requests    │   │ - Diary I/O   │
//! │ - Theming     │   │ - Decoding    │   │ - IPC bridge  │
//! │ - Components  │   │ - Supersession│   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                 │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Storage & Infrastructure                   │
//! │  - Wines, categories, diary entries (domain/)       │
//! │  - Blob stores (storage/)                           │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry spans exported as OTLP JSON        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in the library calls a Zellij host function. Side effects leave
//! [`handle_event`] as [`Action`] values that the shim executes, so the whole
//! library builds and tests on the native target.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/sommelier.wasm" {
//!         base_url "https://api.sampleapis.com/wines"
//!         category "whites"
//!         sort "reviews"
//!         theme "bordeaux-light"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use sommelier::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! assert!(matches!(actions[0], Action::FetchCatalog(_)));
//! # Ok::<(), sommelier::SommelierError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus, Tab};
pub use domain::{CatalogError, Result, SommelierError};
pub use ui::Theme;

use app::QuerySortState;
use catalog::{CatalogClient, DEFAULT_BASE_URL};
use domain::{Category, SortKey};
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration map.
///
/// Unknown keys are ignored and invalid values fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog endpoint; requests go to `<base_url>/<category id>`.
    pub base_url: String,

    /// Category fetched once web access is granted.
    pub category: Category,

    /// Initial sort key.
    pub sort_key: SortKey,

    /// Built-in theme name (`bordeaux`, `bordeaux-light`). Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file, with `~` already expanded.
    pub theme_file: Option<String>,

    /// Tracing filter directive, e.g. `debug` or `sommelier=trace`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            category: Category::default(),
            sort_key: SortKey::default(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `base_url`: used as-is unless blank
    /// - `category`: category id (`reds`, `whites`, `sparkling`, `rose`,
    ///   `dessert`, `port`)
    /// - `sort`: `rating` or `reviews`
    /// - `theme`, `trace_level`: passed through
    /// - `theme_file`: `~` is expanded to the sandbox host mount
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use sommelier::Config;
    /// use sommelier::domain::{Category, SortKey};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("category".to_string(), "sparkling".to_string());
    /// map.insert("sort".to_string(), "bogus".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.category, Category::Sparkling);
    /// assert_eq!(config.sort_key, SortKey::Rating);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let base_url = config
            .get("base_url")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.base_url);

        let category = config
            .get("category")
            .and_then(|id| Category::from_id(id.trim()))
            .unwrap_or(defaults.category);

        let sort_key = config
            .get("sort")
            .and_then(|id| SortKey::from_id(id.trim()))
            .unwrap_or(defaults.sort_key);

        Self {
            base_url,
            category,
            sort_key,
            theme_name: config.get("theme").cloned(),
            theme_file: config
                .get("theme_file")
                .map(|path| infrastructure::expand_tilde(path)),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            match Theme::from_file(theme_file) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme file");
                }
            }
        }

        if let Some(theme_name) = &self.theme_name {
            match Theme::from_name(theme_name) {
                Some(theme) => return theme,
                None => tracing::warn!(theme_name = %theme_name, "unknown theme, using default"),
            }
        }

        Theme::default()
    }
}

/// Builds the initial application state.
///
/// The theme comes from `theme_file`, then `theme`, then the built-in
/// default. No request is issued yet: the first fetch starts when the host
/// grants web access.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        base_url = %config.base_url,
        category = config.category.id(),
        sort = config.sort_key.id(),
        "initializing sommelier"
    );

    let query = QuerySortState {
        query: String::new(),
        sort_key: config.sort_key,
        category: config.category,
    };

    AppState::new(CatalogClient::new(config.base_url.clone()), query, config.load_theme())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_every_key() {
        let config = Config::from_zellij(&map(&[
            ("base_url", "http://localhost:8080/wines/"),
            ("category", "port"),
            ("sort", "reviews"),
            ("theme", "bordeaux-light"),
            ("theme_file", "~/cellar.toml"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.base_url, "http://localhost:8080/wines/");
        assert_eq!(config.category, Category::Port);
        assert_eq!(config.sort_key, SortKey::ReviewCount);
        assert_eq!(config.theme_name.as_deref(), Some("bordeaux-light"));
        assert_eq!(config.theme_file.as_deref(), Some("/host/cellar.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("base_url", "   "),
            ("category", "beer"),
            ("sort", "price"),
        ]));

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.category, Category::Reds);
        assert_eq!(config.sort_key, SortKey::Rating);
    }

    #[test]
    fn initialize_applies_config() {
        let config = Config {
            category: Category::Whites,
            sort_key: SortKey::ReviewCount,
            theme_name: Some("bordeaux-light".to_string()),
            ..Config::default()
        };

        let state = initialize(&config);
        assert_eq!(state.query.category, Category::Whites);
        assert_eq!(state.query.sort_key, SortKey::ReviewCount);
        assert_eq!(state.loader.category(), Category::Whites);
        assert_eq!(state.theme.name, "bordeaux-light");
        assert_eq!(state.active_tab(), Tab::Search);
    }

    #[test]
    fn missing_theme_file_falls_back_to_name() {
        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            theme_name: Some("bordeaux-light".to_string()),
            ..Config::default()
        };

        assert_eq!(initialize(&config).theme.name, "bordeaux-light");
    }
}

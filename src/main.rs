//! Zellij plugin wrapper and entry point.
//!
//! This is the only module that calls Zellij host functions. It implements
//! `ZellijPlugin` and `ZellijWorker`, translates host events into library
//! events, and executes the actions the library returns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │        web_request
//! │  │  State (plugin)  │───┼──────────────────────▶ catalog endpoint
//! │  └──────────────────┘◀──┼── WebRequestResult ───
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │ SommelierWorker  │   │  ← Diary storage
//! │  │ (worker thread)  │   │
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request web and filesystem access; the grant starts
//!    the first catalog fetch and the diary load
//! 3. **Update**: Map host events to library events and run the resulting
//!    actions
//! 4. **Render**: Call the library renderer
//!
//! # Keybindings
//!
//! Everywhere:
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//! - `Tab` / `Shift+Tab`: Next / previous view (outside typing)
//! - `1` `2` `3`: Explore, Diary, Settings (outside typing)
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`: Move
//! - `/`: Search (Explore)
//! - `h`/`Left`, `l`/`Right`: Previous / next category (Explore)
//! - `s`: Toggle sort (Explore)
//! - `r`: Retry a failed load (Explore)
//! - `a`: New diary entry (Diary)
//! - `q`: Close plugin
//!
//! Typing in the search box:
//! - Characters edit the query, `Ctrl+u` clears it
//! - `Enter`: Move focus to the results
//! - `Esc`: Clear and leave search
//!
//! Navigating search results:
//! - `j`/`k`: Move, `/`: Edit query, `s`: Toggle sort, `Esc`: Leave search

#![allow(clippy::multiple_crate_versions)]

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::{post_message_to, post_message_to_plugin};

use sommelier::app::{AppState, SearchFocus, Tab};
use sommelier::catalog::{ticket_from_context, CatalogClient};
use sommelier::worker::{DiaryWorker, WorkerMessage, WorkerResponse};
use sommelier::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);
register_worker!(SommelierWorker, sommelier_worker, SOMMELIER_WORKER);

/// Name shared by the worker registration and its plugin messages.
const WORKER_NAME: &str = "sommelier";

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the worker name used for IPC.
struct State {
    app: AppState,
    worker_name: String,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: sommelier::initialize(&Config::default()),
            worker_name: WORKER_NAME.to_string(),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// - `WebAccess`: Fetch the wine catalog
    /// - `FullHdAccess`: Read and write the diary and trace files under the
    ///   data directory
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        sommelier::observability::init_tracing(&config);

        let _span = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(base_url = %config.base_url, category = config.category.id(), "parsed configuration");
        self.app = sommelier::initialize(&config);

        request_permission(&[PermissionType::WebAccess, PermissionType::FullHdAccess]);
        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match map_key_event(&self.app, key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result_event(status, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        sommelier::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Decodes a finished catalog request. Results without a ticket in their
    /// context did not come from this plugin and are dropped.
    fn map_web_result_event(status: u16, body: &[u8], context: &BTreeMap<String, String>) -> Option<Event> {
        let Some(ticket) = ticket_from_context(context) else {
            tracing::debug!(?context, "web result without fetch ticket");
            return None;
        };

        let outcome = CatalogClient::decode(status, body);
        if let Err(e) = &outcome {
            tracing::warn!(category = ticket.category.id(), generation = ticket.generation, error = %e, "catalog fetch failed");
        }
        Some(Event::CatalogFetched { ticket, outcome })
    }

    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize worker message"),
        }
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::FetchCatalog(request) => {
                tracing::debug!(url = %request.url, "issuing catalog request");
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request.context.clone(),
                );
            }
            Action::PostToWorker(message) => self.post_worker_message(message),
        }
    }
}

fn is_ctrl(key: &KeyWithModifier, c: char) -> bool {
    key.bare_key == BareKey::Char(c) && key.has_modifiers(&[KeyModifier::Ctrl])
}

/// Maps keyboard events to application events for the active view and input mode.
fn map_key_event(app: &AppState, key: &KeyWithModifier) -> Option<Event> {
    tracing::debug!(bare_key = ?key.bare_key, "key event");

    if is_ctrl(key, 'n') {
        return Some(Event::KeyDown);
    }
    if is_ctrl(key, 'p') {
        return Some(Event::KeyUp);
    }
    if is_ctrl(key, 'u') {
        return Some(Event::ClearQuery);
    }

    match app.input_mode {
        InputMode::Search(SearchFocus::Typing) => map_typing_key(key),
        InputMode::Search(SearchFocus::Navigating) => map_navigating_key(key),
        InputMode::Normal => map_normal_key(app.active_tab(), key),
    }
}

fn map_typing_key(key: &KeyWithModifier) -> Option<Event> {
    Some(match key.bare_key {
        BareKey::Down => Event::KeyDown,
        BareKey::Up => Event::KeyUp,
        BareKey::Enter => Event::FocusResults,
        BareKey::Esc => Event::ExitSearch,
        BareKey::Backspace => Event::Backspace,
        BareKey::Char(c) => Event::Char(c),
        _ => return None,
    })
}

fn map_navigating_key(key: &KeyWithModifier) -> Option<Event> {
    Some(match key.bare_key {
        BareKey::Down | BareKey::Char('j') => Event::KeyDown,
        BareKey::Up | BareKey::Char('k') => Event::KeyUp,
        BareKey::Char('/') => Event::FocusSearchBar,
        BareKey::Char('s') => Event::ToggleSort,
        BareKey::Esc => Event::ExitSearch,
        BareKey::Backspace => Event::Backspace,
        _ => return None,
    })
}

fn map_normal_key(tab: Tab, key: &KeyWithModifier) -> Option<Event> {
    if let BareKey::Char(c) = key.bare_key {
        if let Some(tab) = Tab::from_shortcut(c) {
            return Some(Event::SelectTab(tab));
        }
    }

    let event = match key.bare_key {
        BareKey::Down | BareKey::Char('j') => Event::KeyDown,
        BareKey::Up | BareKey::Char('k') => Event::KeyUp,
        BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PreviousTab,
        BareKey::Tab => Event::NextTab,
        BareKey::Esc => Event::Escape,
        BareKey::Char('q') => Event::CloseFocus,
        BareKey::Char('/') if tab == Tab::Search => Event::SearchMode,
        BareKey::Left | BareKey::Char('h') if tab == Tab::Search => Event::PreviousCategory,
        BareKey::Right | BareKey::Char('l') if tab == Tab::Search => Event::NextCategory,
        BareKey::Char('s') if tab == Tab::Search => Event::ToggleSort,
        BareKey::Char('r') if tab == Tab::Search => Event::Retry,
        BareKey::Char('a') if tab == Tab::Diary => Event::NewDiaryEntry,
        _ => return None,
    };
    Some(event)
}

/// Worker-thread entry point.
///
/// Zellij constructs the worker through `Default` and hands it raw message
/// payloads. The diary store opens lazily on the first message.
#[derive(Default, Serialize, Deserialize)]
struct SommelierWorker {
    #[serde(skip)]
    inner: DiaryWorker,
}

impl ZellijWorker<'_> for SommelierWorker {
    fn on_message(&mut self, message: String, payload: String) {
        let _span = tracing::debug_span!("worker_on_message", message = %message).entered();

        if let Some(response) = self.inner.handle_payload(&payload) {
            post_message_to_plugin(PluginMessage {
                worker_name: None,
                name: WORKER_NAME.to_string(),
                payload: response,
            });
        }
    }
}

//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input, host
//! results and worker responses, translating them into state changes and
//! action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime or worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `SelectTab`, `NextTab`, `PreviousTab`
//! - **Input**: `Char`, `Backspace`, `ClearQuery`, `Escape`
//! - **Mode Switching**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`
//! - **Catalog**: `NextCategory`, `PreviousCategory`, `ToggleSort`, `Retry`, `CatalogFetched`
//! - **System**: `PermissionsResult`, `WorkerResponse`
//!
//! # Example
//!
//! ```rust
//! use sommelier::app::{handle_event, AppState, Event};
//! use sommelier::app::state::QuerySortState;
//! use sommelier::catalog::CatalogClient;
//! use sommelier::ui::Theme;
//!
//! let mut state = AppState::new(CatalogClient::default(), QuerySortState::default(), Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! assert!(should_render);
//! assert_eq!(actions.len(), 2);
//! # Ok::<(), sommelier::SommelierError>(())
//! ```

use super::modes::{InputMode, SearchFocus};
use super::router::Tab;
use super::state::DIARY_WRITE_NOTICE;
use crate::app::{Action, AppState};
use crate::catalog::{FetchTicket, Resolution};
use crate::domain::error::Result;
use crate::domain::{CatalogError, WineItem};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, host results, or worker responses.
///
/// The event handler processes these sequentially, so state transitions are
/// deterministic for a given event order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down by one row.
    KeyDown,
    /// Moves the cursor up by one row.
    KeyUp,
    /// Hides the plugin UI.
    CloseFocus,

    /// Activates a top-level view.
    SelectTab(Tab),
    /// Activates the view to the right.
    NextTab,
    /// Activates the view to the left.
    PreviousTab,

    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search box (from navigating mode).
    FocusSearchBar,
    /// Focuses the result list (from typing mode).
    FocusResults,
    /// Clears the query and leaves search mode.
    ExitSearch,
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character from the query.
    Backspace,
    /// Empties the query, staying in search mode.
    ClearQuery,
    /// Clears the query and returns to normal mode.
    Escape,

    /// Switches to the next category and fetches it.
    NextCategory,
    /// Switches to the previous category and fetches it.
    PreviousCategory,
    /// Flips between sorting by rating and by review count.
    ToggleSort,
    /// Refetches the active category after a failure.
    Retry,

    /// Asks to write a diary entry.
    NewDiaryEntry,

    /// Reports whether the requested permissions were granted.
    ///
    /// Loading starts on the first grant.
    PermissionsResult { granted: bool },

    /// Delivers the decoded result of a catalog request.
    ///
    /// Results may arrive in any order; the ticket decides whether this one is
    /// still wanted.
    CatalogFetched {
        ticket: FetchTicket,
        outcome: std::result::Result<Vec<WineItem>, CatalogError>,
    },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

impl Event {
    /// Returns `true` for events caused by a key press.
    #[must_use]
    pub const fn is_user_input(&self) -> bool {
        !matches!(
            self,
            Self::PermissionsResult { .. } | Self::CatalogFetched { .. } | Self::WorkerResponse(_)
        )
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the UI should re-render, together with the side effects to
/// run in order.
///
/// # Errors
///
/// Reserved for state transitions that can fail; every current transition is
/// infallible.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let cleared_notice = event.is_user_input() && state.notice.take().is_some();

    let (should_render, actions) = match event {
        Event::KeyDown => (state.move_selection_down(), vec![]),
        Event::KeyUp => (state.move_selection_up(), vec![]),
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
        Event::SelectTab(tab) => select_tab(state, *tab),
        Event::NextTab => {
            let next = state.active_tab().next();
            select_tab(state, next)
        }
        Event::PreviousTab => {
            let previous = state.active_tab().previous();
            select_tab(state, previous)
        }
        Event::SearchMode => {
            if state.active_tab() != Tab::Search {
                return Ok((cleared_notice, vec![]));
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            (true, vec![])
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            (true, vec![])
        }
        Event::FocusResults => {
            if state.query.query.is_empty() {
                state.input_mode = InputMode::Normal;
            } else {
                state.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            (true, vec![])
        }
        Event::ExitSearch | Event::Escape => {
            tracing::debug!(query = %state.query.query, "exiting search mode");
            let changed = !state.query.query.is_empty() || state.input_mode != InputMode::Normal;
            state.input_mode = InputMode::Normal;
            state.query.query.clear();
            state.clamp_selection();
            (changed, vec![])
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((cleared_notice, vec![]));
            }
            state.query.query.push(*c);
            tracing::trace!(query = %state.query.query, "search query updated");
            state.clamp_selection();
            (true, vec![])
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((cleared_notice, vec![]));
            }
            state.query.query.pop();
            state.clamp_selection();
            (true, vec![])
        }
        Event::ClearQuery => {
            if state.query.query.is_empty() {
                return Ok((cleared_notice, vec![]));
            }
            state.query.query.clear();
            state.clamp_selection();
            (true, vec![])
        }
        Event::NextCategory | Event::PreviousCategory => {
            if state.active_tab() != Tab::Search {
                return Ok((cleared_notice, vec![]));
            }
            let category = if *event == Event::NextCategory {
                state.query.category.next()
            } else {
                state.query.category.previous()
            };
            let actions = state
                .change_category(category)
                .map(Action::FetchCatalog)
                .into_iter()
                .collect();
            (true, actions)
        }
        Event::ToggleSort => {
            if state.active_tab() != Tab::Search {
                return Ok((cleared_notice, vec![]));
            }
            state.query.sort_key = state.query.sort_key.toggled();
            tracing::debug!(sort_key = state.query.sort_key.id(), "sort key toggled");
            (true, vec![])
        }
        Event::Retry => match state.retry() {
            Some(request) => (true, vec![Action::FetchCatalog(request)]),
            None => (false, vec![]),
        },
        Event::NewDiaryEntry => {
            if state.active_tab() != Tab::Diary {
                return Ok((cleared_notice, vec![]));
            }
            state.notice = Some(DIARY_WRITE_NOTICE.to_string());
            (true, vec![])
        }
        Event::PermissionsResult { granted } => {
            if !*granted {
                tracing::warn!("permissions denied - catalog cannot be fetched");
                return Ok((false, vec![]));
            }

            let mut actions = vec![];
            if let Some(request) = state.start_loading() {
                actions.push(Action::FetchCatalog(request));
            }
            actions.push(Action::PostToWorker(WorkerMessage::load_diary()));
            (true, actions)
        }
        Event::CatalogFetched { ticket, outcome } => {
            match state.loader.resolve(*ticket, outcome.clone()) {
                Resolution::Applied => {
                    state.clamp_selection();
                    (true, vec![])
                }
                Resolution::Superseded => (false, vec![]),
            }
        }
        Event::WorkerResponse(response) => handle_worker_response(state, response),
    };

    Ok((should_render || cleared_notice, actions))
}

fn select_tab(state: &mut AppState, tab: Tab) -> (bool, Vec<Action>) {
    if !state.select_tab(tab) {
        return (false, vec![]);
    }

    let actions = if tab == Tab::Diary {
        vec![Action::PostToWorker(WorkerMessage::load_diary())]
    } else {
        vec![]
    };
    (true, actions)
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::DiaryLoaded { entries } => {
            if &state.diary == entries {
                tracing::debug!("diary unchanged, skipping render");
                return (false, vec![]);
            }
            state.diary.clone_from(entries);
            state.clamp_selection();
            (state.active_tab() == Tab::Diary, vec![])
        }
        WorkerResponse::DiarySaved { count } => {
            tracing::debug!(count = count, "diary saved");
            (false, vec![])
        }
        WorkerResponse::Error { message } => {
            tracing::error!("Worker error: {}", message);
            (false, vec![])
        }
    }
}

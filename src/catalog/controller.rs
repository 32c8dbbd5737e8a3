//! Load lifecycle for the active catalog category.
//!
//! [`LoadController`] owns the `Idle → Loading → Loaded | Failed` state machine
//! for one category at a time. Every transition into `Loading` bumps a
//! generation counter and hands out a [`FetchTicket`]; a result is applied only
//! if its ticket carries the current generation. Results of superseded
//! requests are dropped on arrival, whatever order the host delivers them in.

use super::client::FetchTicket;
use crate::domain::{CatalogError, Category, WineItem};

/// User-facing message for any failed load, independent of the cause.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load wine information";

/// Lifecycle of the active category's data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<WineItem>),
    Failed(String),
}

/// What [`LoadController::resolve`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The result belonged to the current request and was applied.
    Applied,
    /// A newer request was issued since; the result was discarded.
    Superseded,
}

/// Owner of the catalog load state machine.
#[derive(Debug, Clone, Default)]
pub struct LoadController {
    category: Category,
    generation: u64,
    state: LoadState,
}

impl LoadController {
    /// Creates an idle controller pointing at `category`.
    ///
    /// Nothing is requested until [`set_category`](Self::set_category) is called.
    #[must_use]
    pub fn new(category: Category) -> Self {
        Self {
            category,
            generation: 0,
            state: LoadState::Idle,
        }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Items of the current category, empty unless loaded.
    #[must_use]
    pub fn items(&self) -> &[WineItem] {
        match &self.state {
            LoadState::Loaded(items) => items.as_slice(),
            _ => &[],
        }
    }

    /// Switches to `category` and starts loading it.
    ///
    /// Valid from any state. Previously loaded or failed data is dropped and any
    /// outstanding request is superseded.
    pub fn set_category(&mut self, category: Category) -> FetchTicket {
        tracing::debug!(
            from = self.category.id(),
            to = category.id(),
            previous_state = state_name(&self.state),
            "category changed"
        );
        self.category = category;
        self.begin_loading()
    }

    /// Reloads the current category after a failure.
    ///
    /// Returns `None` (and changes nothing) unless the controller is `Failed`.
    pub fn retry(&mut self) -> Option<FetchTicket> {
        if !matches!(self.state, LoadState::Failed(_)) {
            tracing::debug!(state = state_name(&self.state), "retry ignored outside failed state");
            return None;
        }

        tracing::debug!(category = self.category.id(), "retrying catalog load");
        Some(self.begin_loading())
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// The outcome is applied only if `ticket` is the latest issued ticket and
    /// the controller is still loading. The failure cause is logged; the
    /// visible state only carries [`LOAD_FAILED_MESSAGE`].
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Vec<WineItem>, CatalogError>,
    ) -> Resolution {
        let _span = tracing::debug_span!("load_resolve",
            category = ticket.category.id(),
            generation = ticket.generation,
            current_generation = self.generation
        )
        .entered();

        if ticket.generation != self.generation
            || ticket.category != self.category
            || self.state != LoadState::Loading
        {
            tracing::debug!("discarding superseded catalog result");
            return Resolution::Superseded;
        }

        self.state = match outcome {
            Ok(items) => {
                tracing::debug!(item_count = items.len(), "catalog loaded");
                LoadState::Loaded(items)
            }
            Err(e) => {
                tracing::warn!(error = %e, category = ticket.category.id(), "catalog load failed");
                LoadState::Failed(LOAD_FAILED_MESSAGE.to_string())
            }
        };

        Resolution::Applied
    }

    fn begin_loading(&mut self) -> FetchTicket {
        self.generation = self.generation.wrapping_add(1);
        self.state = LoadState::Loading;
        FetchTicket {
            category: self.category,
            generation: self.generation,
        }
    }
}

const fn state_name(state: &LoadState) -> &'static str {
    match state {
        LoadState::Idle => "idle",
        LoadState::Loading => "loading",
        LoadState::Loaded(_) => "loaded",
        LoadState::Failed(_) => "failed",
    }
}

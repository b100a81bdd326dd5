//! Composition of the two state slices and the dispatch seam.
//!
//! [`Store`] owns one [`SearchState`] and one [`DetailsState`] and routes each
//! [`AppEvent`] to the reducer of its slice. Events are applied synchronously,
//! in the order they are dispatched.
//!
//! Operations are written against the [`Dispatch`] trait rather than `Store`
//! directly, so a test can wrap the store and record what was dispatched.

use super::details::{self, DetailsEvent, DetailsState};
use super::search::{self, SearchEvent, SearchState};

/// An event for either slice.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Search(SearchEvent),
    Details(DetailsEvent),
}

impl AppEvent {
    /// Short event name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Search(event) => event.name(),
            Self::Details(event) => event.name(),
        }
    }
}

impl From<SearchEvent> for AppEvent {
    fn from(event: SearchEvent) -> Self {
        Self::Search(event)
    }
}

impl From<DetailsEvent> for AppEvent {
    fn from(event: DetailsEvent) -> Self {
        Self::Details(event)
    }
}

/// Read access to current state plus the ability to dispatch events.
pub trait Dispatch {
    fn search_state(&self) -> &SearchState;
    fn details_state(&self) -> &DetailsState;
    fn dispatch(&mut self, event: AppEvent);
}

/// Holds the current snapshot of both slices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    search: SearchState,
    details: DetailsState,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn search(&self) -> &SearchState {
        &self.search
    }

    #[must_use]
    pub const fn details(&self) -> &DetailsState {
        &self.details
    }
}

impl Dispatch for Store {
    fn search_state(&self) -> &SearchState {
        &self.search
    }

    fn details_state(&self) -> &DetailsState {
        &self.details
    }

    fn dispatch(&mut self, event: AppEvent) {
        tracing::debug!(event = event.name(), "dispatching");
        match &event {
            AppEvent::Search(event) => self.search = search::reduce(&self.search, event),
            AppEvent::Details(event) => self.details = details::reduce(&self.details, event),
        }
    }
}

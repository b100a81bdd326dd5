//! Search slice: the search box, the submitted term, its results and history.
//!
//! [`reduce`] is a pure transition function. It never mutates the previous
//! state; every event produces a fresh [`SearchState`] (the history vector is
//! rebuilt rather than pushed onto) so earlier snapshots stay intact.
//!
//! Responses are matched against the currently tracked term. A response for a
//! term that has since been superseded leaves the state untouched, which makes
//! out-of-order resolution of overlapping requests harmless.

use crate::domain::{Fetched, MovieListResult};

/// Maximum number of retained history entries.
pub const HISTORY_CAP: usize = 5;

/// Minimum number of characters a search term must have to be submitted.
pub const MIN_SEARCH_LENGTH: usize = 5;

/// A committed search kept in the session history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRecord {
    /// Monotonic within the session.
    pub id: u64,
    pub search_term: String,
}

/// State of the search screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    /// Current contents of the search box.
    pub search_input: String,
    /// Last submitted term, `None` until the first search.
    pub search: Option<String>,
    /// Cleared when a too-short term is submitted, restored by the next search.
    pub is_search_valid: bool,
    /// Set while a request for `search` is outstanding.
    pub is_loading: bool,
    /// Body of the last applied response for `search`, or its transport failure.
    pub results: Fetched<MovieListResult>,
    /// Oldest first, at most [`HISTORY_CAP`] entries.
    pub search_history: Vec<SearchRecord>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            search_input: String::new(),
            search: None,
            is_search_valid: true,
            is_loading: false,
            results: Fetched::Unloaded,
            search_history: Vec::new(),
        }
    }
}

impl SearchState {
    /// `true` if `term` is the currently tracked search.
    #[must_use]
    pub fn is_current(&self, term: &str) -> bool {
        self.search.as_deref() == Some(term)
    }

    /// Identifier the next history record will receive.
    #[must_use]
    pub fn next_history_id(&self) -> u64 {
        self.search_history.last().map_or(0, |record| record.id + 1)
    }
}

/// Events accepted by the search slice.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// A too-short term was submitted.
    InvalidateSearch,
    /// The search box contents changed.
    SearchInputChanged(String),
    /// A new term was committed and its request issued.
    SearchSubmitted(String),
    /// The backend answered the request for the given term.
    SearchResultsReceived(String, MovieListResult),
    /// The request for the given term failed on the transport channel.
    SearchFailed(String),
}

impl SearchEvent {
    /// Short event name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InvalidateSearch => "InvalidateSearch",
            Self::SearchInputChanged(_) => "SearchInputChanged",
            Self::SearchSubmitted(_) => "SearchSubmitted",
            Self::SearchResultsReceived(..) => "SearchResultsReceived",
            Self::SearchFailed(_) => "SearchFailed",
        }
    }
}

/// Applies `event` to `state`, returning the next state.
#[must_use]
pub fn reduce(state: &SearchState, event: &SearchEvent) -> SearchState {
    match event {
        SearchEvent::InvalidateSearch => SearchState {
            is_search_valid: false,
            ..state.clone()
        },
        SearchEvent::SearchInputChanged(text) => SearchState {
            search_input: text.clone(),
            ..state.clone()
        },
        SearchEvent::SearchSubmitted(term) => SearchState {
            search_input: term.clone(),
            search: Some(term.clone()),
            is_search_valid: true,
            is_loading: true,
            results: state.results.clone(),
            search_history: append_history(&state.search_history, state.next_history_id(), term),
        },
        SearchEvent::SearchResultsReceived(term, results) => {
            if !state.is_current(term) {
                tracing::debug!(term = %term, current = ?state.search, "dropping stale search results");
                return state.clone();
            }
            SearchState {
                search_input: term.clone(),
                search: Some(term.clone()),
                is_search_valid: true,
                is_loading: false,
                results: Fetched::Loaded(results.clone()),
                search_history: state.search_history.clone(),
            }
        }
        SearchEvent::SearchFailed(term) => {
            if !state.is_current(term) {
                tracing::debug!(term = %term, current = ?state.search, "dropping stale search failure");
                return state.clone();
            }
            SearchState {
                search_input: term.clone(),
                search: Some(term.clone()),
                is_search_valid: true,
                is_loading: false,
                results: Fetched::transport_failure(),
                search_history: state.search_history.clone(),
            }
        }
    }
}

/// Returns a new history with `term` appended and the oldest entries dropped.
fn append_history(history: &[SearchRecord], id: u64, term: &str) -> Vec<SearchRecord> {
    let skip = (history.len() + 1).saturating_sub(HISTORY_CAP);
    history
        .iter()
        .skip(skip)
        .cloned()
        .chain(std::iter::once(SearchRecord {
            id,
            search_term: term.to_string(),
        }))
        .collect()
}

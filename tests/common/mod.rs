//! Shared fakes for the integration tests.

#![allow(dead_code)]

use moviebrowser::api::{FetchCompletion, FetchRequest, MovieFetcher};
use moviebrowser::app::{complete_fetch, AppEvent, DetailsState, Dispatch, SearchState, Store};
use moviebrowser::domain::{FetchError, MovieDetailsEntry, MovieListEntry, MovieListResult};

/// A store that also remembers every dispatched event.
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub store: Store,
    pub events: Vec<AppEvent>,
}

impl Dispatch for RecordingStore {
    fn search_state(&self) -> &SearchState {
        self.store.search_state()
    }

    fn details_state(&self) -> &DetailsState {
        self.store.details_state()
    }

    fn dispatch(&mut self, event: AppEvent) {
        self.events.push(event.clone());
        self.store.dispatch(event);
    }
}

/// Holds requests until the test decides how and in which order they resolve.
#[derive(Debug, Default)]
pub struct PendingFetcher {
    pub pending: Vec<FetchRequest>,
}

impl MovieFetcher for PendingFetcher {
    fn request(&mut self, request: FetchRequest) -> moviebrowser::Result<()> {
        self.pending.push(request);
        Ok(())
    }
}

impl PendingFetcher {
    /// Removes the pending request matching `request`.
    ///
    /// # Panics
    ///
    /// Panics if no such request is pending.
    pub fn take(&mut self, request: &FetchRequest) -> FetchRequest {
        let index = self
            .pending
            .iter()
            .position(|pending| pending == request)
            .unwrap_or_else(|| panic!("{request:?} is not pending"));
        self.pending.remove(index)
    }

    pub fn resolve_search<D: Dispatch>(&mut self, dispatch: &mut D, term: &str, result: MovieListResult) {
        let FetchRequest::Search { term } = self.take(&FetchRequest::search(term)) else {
            unreachable!();
        };
        complete_fetch(dispatch, FetchCompletion::Search { term, outcome: Ok(result) });
    }

    pub fn resolve_details<D: Dispatch>(&mut self, dispatch: &mut D, imdb_id: &str, movie: MovieDetailsEntry) {
        let FetchRequest::Details { imdb_id } = self.take(&FetchRequest::details(imdb_id)) else {
            unreachable!();
        };
        complete_fetch(dispatch, FetchCompletion::Details { imdb_id, outcome: Ok(movie) });
    }

    pub fn fail<D: Dispatch>(&mut self, dispatch: &mut D, request: &FetchRequest, error: FetchError) {
        let request = self.take(request);
        complete_fetch(dispatch, FetchCompletion::failed(request, error));
    }
}

pub fn movie_list(entries: &[(&str, &str, &str)]) -> MovieListResult {
    MovieListResult {
        response: true,
        error: None,
        entries: entries
            .iter()
            .map(|(imdb_id, title, year)| MovieListEntry {
                imdb_id: (*imdb_id).to_string(),
                title: (*title).to_string(),
                year: (*year).to_string(),
                kind: "movie".to_string(),
                poster: "N/A".to_string(),
            })
            .collect(),
    }
}

pub fn movie(imdb_id: &str, title: &str) -> MovieDetailsEntry {
    MovieDetailsEntry {
        imdb_id: imdb_id.to_string(),
        title: title.to_string(),
        response: true,
        ..MovieDetailsEntry::default()
    }
}

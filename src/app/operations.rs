//! Operations: the only code that both dispatches events and talks to the
//! fetcher.
//!
//! Each operation reads the current state through [`Dispatch`], dispatches
//! the request event synchronously and then hands the request to the
//! [`MovieFetcher`]. The answer arrives later and is fed back through
//! [`complete_fetch`]. Transport errors are logged here and turned into the
//! fixed failure events; the raw error never reaches state.

use super::details::DetailsEvent;
use super::search::{SearchEvent, MIN_SEARCH_LENGTH};
use super::store::Dispatch;
use crate::api::{FetchCompletion, FetchRequest, MovieFetcher};

/// Commits `term` as the current search and requests its results.
///
/// Does nothing if `term` is already the current search.
#[tracing::instrument(level = "debug", skip(dispatch, fetcher))]
pub fn search_movies<D, F>(dispatch: &mut D, fetcher: &mut F, term: &str)
where
    D: Dispatch + ?Sized,
    F: MovieFetcher + ?Sized,
{
    if dispatch.search_state().is_current(term) {
        tracing::debug!("search already current, skipping");
        return;
    }

    dispatch.dispatch(SearchEvent::SearchSubmitted(term.to_string()).into());
    send(dispatch, fetcher, FetchRequest::search(term));
}

/// Opens `imdb_id` on the details screen and requests it.
///
/// Does nothing if `imdb_id` is blank or already the tracked movie.
#[tracing::instrument(level = "debug", skip(dispatch, fetcher))]
pub fn load_movie<D, F>(dispatch: &mut D, fetcher: &mut F, imdb_id: &str)
where
    D: Dispatch + ?Sized,
    F: MovieFetcher + ?Sized,
{
    if imdb_id.trim().is_empty() {
        tracing::debug!("blank movie id, skipping");
        return;
    }
    if dispatch.details_state().is_current(imdb_id) {
        tracing::debug!("movie already tracked, skipping");
        return;
    }

    dispatch.dispatch(DetailsEvent::DetailsRequested(imdb_id.to_string()).into());
    send(dispatch, fetcher, FetchRequest::details(imdb_id));
}

/// Hands `request` to the fetcher; a refused request completes as a
/// transport failure right away.
fn send<D, F>(dispatch: &mut D, fetcher: &mut F, request: FetchRequest)
where
    D: Dispatch + ?Sized,
    F: MovieFetcher + ?Sized,
{
    if let Err(e) = fetcher.request(request.clone()) {
        tracing::debug!(error = %e, "request not sent");
        complete_fetch(dispatch, FetchCompletion::failed(request, e.into()));
    }
}

/// Submits the search box contents.
///
/// Input shorter than [`MIN_SEARCH_LENGTH`] characters only marks the search
/// invalid.
pub fn submit_search<D, F>(dispatch: &mut D, fetcher: &mut F)
where
    D: Dispatch + ?Sized,
    F: MovieFetcher + ?Sized,
{
    let term = dispatch.search_state().search_input.clone();
    if term.chars().count() < MIN_SEARCH_LENGTH {
        invalidate_search(dispatch);
        return;
    }
    search_movies(dispatch, fetcher, &term);
}

pub fn update_search_input<D: Dispatch + ?Sized>(dispatch: &mut D, text: &str) {
    dispatch.dispatch(SearchEvent::SearchInputChanged(text.to_string()).into());
}

pub fn invalidate_search<D: Dispatch + ?Sized>(dispatch: &mut D) {
    dispatch.dispatch(SearchEvent::InvalidateSearch.into());
}

/// Applies the answer to an earlier request.
///
/// Dispatches exactly one event. Whether it changes anything is up to the
/// reducer, which ignores answers for superseded requests.
pub fn complete_fetch<D: Dispatch + ?Sized>(dispatch: &mut D, completion: FetchCompletion) {
    let event = match completion {
        FetchCompletion::Search { term, outcome } => match outcome {
            Ok(results) => SearchEvent::SearchResultsReceived(term, results).into(),
            Err(e) => {
                tracing::warn!(error = %e, term = %term, "search request failed");
                SearchEvent::SearchFailed(term).into()
            }
        },
        FetchCompletion::Details { imdb_id, outcome } => match outcome {
            Ok(movie) => DetailsEvent::DetailsReceived(imdb_id, movie).into(),
            Err(e) => {
                tracing::warn!(error = %e, imdb_id = %imdb_id, "details request failed");
                DetailsEvent::DetailsFailed(imdb_id).into()
            }
        },
    };
    dispatch.dispatch(event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::details::DetailsState;
    use crate::app::search::SearchState;
    use crate::app::store::{AppEvent, Store};
    use crate::domain::{
        FetchError, MovieBrowserError, MovieDetailsEntry, MovieListResult, Result,
        FAILED_TO_RETRIEVE,
    };

    #[derive(Default)]
    struct Recording {
        store: Store,
        events: Vec<AppEvent>,
    }

    impl Dispatch for Recording {
        fn search_state(&self) -> &SearchState {
            self.store.search()
        }

        fn details_state(&self) -> &DetailsState {
            self.store.details()
        }

        fn dispatch(&mut self, event: AppEvent) {
            self.events.push(event.clone());
            self.store.dispatch(event);
        }
    }

    #[derive(Default)]
    struct Fetcher {
        sent: Vec<FetchRequest>,
        refuse: bool,
    }

    impl MovieFetcher for Fetcher {
        fn request(&mut self, request: FetchRequest) -> Result<()> {
            if self.refuse {
                return Err(MovieBrowserError::Transport("offline".to_string()));
            }
            self.sent.push(request);
            Ok(())
        }
    }

    fn list(title: &str) -> MovieListResult {
        serde_json::from_value(serde_json::json!({
            "Search": [{"Title": title, "Year": "1989", "imdbID": "tt1", "Type": "movie"}],
            "Response": "True"
        }))
        .unwrap()
    }

    #[test]
    fn search_dispatches_submit_and_requests() {
        let mut dispatch = Recording::default();
        let mut fetcher = Fetcher::default();

        search_movies(&mut dispatch, &mut fetcher, "batman");

        assert_eq!(
            dispatch.events,
            vec![AppEvent::Search(SearchEvent::SearchSubmitted("batman".to_string()))]
        );
        assert_eq!(fetcher.sent, vec![FetchRequest::search("batman")]);
        assert!(dispatch.search_state().is_loading);
    }

    #[test]
    fn repeated_search_is_a_noop() {
        let mut dispatch = Recording::default();
        let mut fetcher = Fetcher::default();

        search_movies(&mut dispatch, &mut fetcher, "batman");
        search_movies(&mut dispatch, &mut fetcher, "batman");

        assert_eq!(dispatch.events.len(), 1);
        assert_eq!(fetcher.sent.len(), 1);
    }

    #[test]
    fn unsent_search_fails_immediately() {
        let mut dispatch = Recording::default();
        let mut fetcher = Fetcher {
            refuse: true,
            ..Fetcher::default()
        };

        search_movies(&mut dispatch, &mut fetcher, "batman");

        assert_eq!(dispatch.events.len(), 2);
        assert!(!dispatch.search_state().is_loading);
        assert_eq!(dispatch.search_state().results.error(), Some(FAILED_TO_RETRIEVE));
    }

    #[test]
    fn short_input_only_invalidates() {
        let mut dispatch = Recording::default();
        let mut fetcher = Fetcher::default();

        update_search_input(&mut dispatch, "2222");
        submit_search(&mut dispatch, &mut fetcher);

        assert_eq!(
            dispatch.events.last(),
            Some(&AppEvent::Search(SearchEvent::InvalidateSearch))
        );
        assert_eq!(dispatch.events.len(), 2);
        assert!(fetcher.sent.is_empty());
        assert!(!dispatch.search_state().is_search_valid);
    }

    #[test]
    fn long_enough_input_is_searched() {
        let mut dispatch = Recording::default();
        let mut fetcher = Fetcher::default();

        update_search_input(&mut dispatch, "22222");
        submit_search(&mut dispatch, &mut fetcher);

        assert_eq!(fetcher.sent, vec![FetchRequest::search("22222")]);
        assert_eq!(dispatch.search_state().search.as_deref(), Some("22222"));
    }

    #[test]
    fn blank_movie_id_is_a_noop() {
        let mut dispatch = Recording::default();
        let mut fetcher = Fetcher::default();

        load_movie(&mut dispatch, &mut fetcher, "");
        load_movie(&mut dispatch, &mut fetcher, "   ");

        assert!(dispatch.events.is_empty());
        assert!(fetcher.sent.is_empty());
        assert_eq!(dispatch.details_state().imdb_id, None);
    }

    #[test]
    fn unsent_details_request_fails_its_own_id() {
        let mut dispatch = Recording::default();
        let mut fetcher = Fetcher {
            refuse: true,
            ..Fetcher::default()
        };

        load_movie(&mut dispatch, &mut fetcher, "tt9");

        assert_eq!(
            dispatch.events,
            vec![
                AppEvent::Details(DetailsEvent::DetailsRequested("tt9".to_string())),
                AppEvent::Details(DetailsEvent::DetailsFailed("tt9".to_string())),
            ]
        );
        assert_eq!(dispatch.details_state().movie.error(), Some(FAILED_TO_RETRIEVE));
    }

    #[test]
    fn completion_applies_results() {
        let mut dispatch = Recording::default();
        let mut fetcher = Fetcher::default();
        search_movies(&mut dispatch, &mut fetcher, "batman");

        complete_fetch(
            &mut dispatch,
            FetchCompletion::Search {
                term: "batman".to_string(),
                outcome: Ok(list("Batman")),
            },
        );

        assert!(!dispatch.search_state().is_loading);
        assert_eq!(dispatch.search_state().results.entries()[0].title, "Batman");
    }

    #[test]
    fn failed_completion_records_fixed_message() {
        let mut dispatch = Recording::default();
        let mut fetcher = Fetcher::default();
        load_movie(&mut dispatch, &mut fetcher, "tt9");

        complete_fetch(
            &mut dispatch,
            FetchCompletion::Details {
                imdb_id: "tt9".to_string(),
                outcome: Err(FetchError::Status(500)),
            },
        );

        let details = dispatch.details_state();
        assert!(!details.is_loading);
        assert_eq!(details.movie.error(), Some(FAILED_TO_RETRIEVE));
    }

    #[test]
    fn load_movie_skips_tracked_id() {
        let mut dispatch = Recording::default();
        let mut fetcher = Fetcher::default();

        load_movie(&mut dispatch, &mut fetcher, "tt1");
        complete_fetch(
            &mut dispatch,
            FetchCompletion::Details {
                imdb_id: "tt1".to_string(),
                outcome: Ok(MovieDetailsEntry {
                    imdb_id: "tt1".to_string(),
                    response: true,
                    ..MovieDetailsEntry::default()
                }),
            },
        );
        load_movie(&mut dispatch, &mut fetcher, "tt1");

        assert_eq!(fetcher.sent, vec![FetchRequest::details("tt1")]);
        assert_eq!(dispatch.events.len(), 2);
    }

    #[test]
    fn unsent_details_fail_immediately() {
        let mut dispatch = Recording::default();
        let mut fetcher = Fetcher {
            refuse: true,
            ..Fetcher::default()
        };

        load_movie(&mut dispatch, &mut fetcher, "tt1");

        assert_eq!(
            dispatch.events,
            vec![
                AppEvent::Details(DetailsEvent::DetailsRequested("tt1".to_string())),
                AppEvent::Details(DetailsEvent::DetailsFailed("tt1".to_string())),
            ]
        );
    }
}

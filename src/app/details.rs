//! Details slice: the movie currently opened on the details screen.
//!
//! Same shape as the search slice. Responses carry the identifier they were
//! requested for and are applied only while that identifier is still tracked.

use crate::domain::{Fetched, MovieDetailsEntry};

/// State of the details screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailsState {
    /// Set while a request for `imdb_id` is outstanding.
    pub is_loading: bool,
    /// Last requested identifier, `None` until the first request.
    pub imdb_id: Option<String>,
    /// Body of the last applied response for `imdb_id`, or its transport failure.
    pub movie: Fetched<MovieDetailsEntry>,
}

impl DetailsState {
    /// `true` if `imdb_id` is the currently tracked movie.
    #[must_use]
    pub fn is_current(&self, imdb_id: &str) -> bool {
        self.imdb_id.as_deref() == Some(imdb_id)
    }
}

/// Events accepted by the details slice.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailsEvent {
    DetailsRequested(String),
    DetailsReceived(String, MovieDetailsEntry),
    DetailsFailed(String),
}

impl DetailsEvent {
    /// Short event name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DetailsRequested(_) => "DetailsRequested",
            Self::DetailsReceived(..) => "DetailsReceived",
            Self::DetailsFailed(_) => "DetailsFailed",
        }
    }
}

/// Applies `event` to `state`, returning the next state.
#[must_use]
pub fn reduce(state: &DetailsState, event: &DetailsEvent) -> DetailsState {
    match event {
        DetailsEvent::DetailsRequested(imdb_id) => DetailsState {
            is_loading: true,
            imdb_id: Some(imdb_id.clone()),
            movie: state.movie.clone(),
        },
        DetailsEvent::DetailsReceived(imdb_id, movie) if state.is_current(imdb_id) => DetailsState {
            is_loading: false,
            imdb_id: Some(imdb_id.clone()),
            movie: Fetched::Loaded(movie.clone()),
        },
        DetailsEvent::DetailsFailed(imdb_id) if state.is_current(imdb_id) => DetailsState {
            is_loading: false,
            imdb_id: Some(imdb_id.clone()),
            movie: Fetched::transport_failure(),
        },
        DetailsEvent::DetailsReceived(imdb_id, _) | DetailsEvent::DetailsFailed(imdb_id) => {
            tracing::debug!(imdb_id = %imdb_id, current = ?state.imdb_id, "dropping stale details response");
            state.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FAILED_TO_RETRIEVE;

    fn movie(imdb_id: &str, title: &str) -> MovieDetailsEntry {
        MovieDetailsEntry {
            imdb_id: imdb_id.to_string(),
            title: title.to_string(),
            year: "2020".to_string(),
            imdb_rating: Some(9.9),
            response: true,
            ..MovieDetailsEntry::default()
        }
    }

    fn requested(imdb_id: &str) -> DetailsState {
        reduce(&DetailsState::default(), &DetailsEvent::DetailsRequested(imdb_id.to_string()))
    }

    #[test]
    fn default_state_has_nothing_loaded() {
        let state = DetailsState::default();

        assert!(!state.is_loading);
        assert_eq!(state.imdb_id, None);
        assert!(state.movie.is_unloaded());
    }

    #[test]
    fn request_sets_loading_and_keeps_previous_movie() {
        let loaded = reduce(
            &requested("tt1"),
            &DetailsEvent::DetailsReceived("tt1".to_string(), movie("tt1", "Batman")),
        );

        let state = reduce(&loaded, &DetailsEvent::DetailsRequested("tt2".to_string()));

        assert!(state.is_loading);
        assert_eq!(state.imdb_id.as_deref(), Some("tt2"));
        assert_eq!(state.movie, loaded.movie);
    }

    #[test]
    fn matching_response_is_applied() {
        let state = reduce(
            &requested("test"),
            &DetailsEvent::DetailsReceived("test".to_string(), movie("test", "test")),
        );

        assert!(!state.is_loading);
        assert_eq!(state.movie, Fetched::Loaded(movie("test", "test")));
    }

    #[test]
    fn superseded_response_is_dropped() {
        let before = reduce(&requested("tt1"), &DetailsEvent::DetailsRequested("tt2".to_string()));

        let after = reduce(
            &before,
            &DetailsEvent::DetailsReceived("tt1".to_string(), movie("tt1", "Batman")),
        );

        assert_eq!(after, before);
        assert!(after.is_loading);
    }

    #[test]
    fn failure_records_fixed_message() {
        let state = reduce(&requested("tt9"), &DetailsEvent::DetailsFailed("tt9".to_string()));

        assert!(!state.is_loading);
        assert!(!state.movie.response());
        assert_eq!(state.movie.error(), Some(FAILED_TO_RETRIEVE));
    }

    #[test]
    fn superseded_failure_is_dropped() {
        let before = reduce(&requested("tt1"), &DetailsEvent::DetailsRequested("tt2".to_string()));

        let after = reduce(&before, &DetailsEvent::DetailsFailed("tt1".to_string()));

        assert_eq!(after, before);
    }
}

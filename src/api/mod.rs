//! Fetch collaborator for the movie database backend.
//!
//! Requests are fire-and-forget: [`MovieFetcher::request`] hands a
//! [`FetchRequest`] to the host and returns immediately. The answer comes back
//! later as a separate plugin event, which [`protocol::decode_completion`] turns
//! into a [`FetchCompletion`] for the operation layer.
//!
//! # Modules
//!
//! - [`endpoints`]: URL construction for the two backend routes
//! - [`protocol`]: request context tagging and response decoding
//! - [`client`]: [`ZellijFetcher`], the `web_request`-backed implementation

pub mod client;
pub mod endpoints;
pub mod protocol;

pub use client::ZellijFetcher;

use crate::app::search::MIN_SEARCH_LENGTH;
use crate::domain::{FetchError, MovieBrowserError, MovieDetailsEntry, MovieListResult, Result};

/// A request for one of the two backend routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// `GET /api/movies/search/{term}`
    Search { term: String },
    /// `GET /api/movies/{imdbID}`
    Details { imdb_id: String },
}

impl FetchRequest {
    #[must_use]
    pub fn search(term: impl Into<String>) -> Self {
        Self::Search { term: term.into() }
    }

    #[must_use]
    pub fn details(imdb_id: impl Into<String>) -> Self {
        Self::Details {
            imdb_id: imdb_id.into(),
        }
    }

    /// Rejects requests the backend would refuse anyway.
    ///
    /// # Errors
    ///
    /// Returns [`MovieBrowserError::InvalidRequest`] for a search shorter than
    /// [`MIN_SEARCH_LENGTH`] characters or a details request without an id.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Search { term } if term.chars().count() < MIN_SEARCH_LENGTH => {
                Err(MovieBrowserError::InvalidRequest(format!(
                    "Search must contain at least {MIN_SEARCH_LENGTH} characters"
                )))
            }
            Self::Details { imdb_id } if imdb_id.trim().is_empty() => Err(
                MovieBrowserError::InvalidRequest("imdbID not provided".to_string()),
            ),
            Self::Search { .. } | Self::Details { .. } => Ok(()),
        }
    }
}

/// The outcome of a request, keyed by what was asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchCompletion {
    Search {
        term: String,
        outcome: std::result::Result<MovieListResult, FetchError>,
    },
    Details {
        imdb_id: String,
        outcome: std::result::Result<MovieDetailsEntry, FetchError>,
    },
}

impl FetchCompletion {
    /// A transport failure for `request`.
    #[must_use]
    pub fn failed(request: FetchRequest, error: FetchError) -> Self {
        match request {
            FetchRequest::Search { term } => Self::Search {
                term,
                outcome: Err(error),
            },
            FetchRequest::Details { imdb_id } => Self::Details {
                imdb_id,
                outcome: Err(error),
            },
        }
    }
}

/// Issues backend requests on behalf of the operations.
pub trait MovieFetcher {
    /// Starts `request` without waiting for its answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be issued at all. No
    /// completion will arrive for such a request.
    fn request(&mut self, request: FetchRequest) -> Result<()>;
}

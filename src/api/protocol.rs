//! Request tagging and response decoding.
//!
//! Zellij echoes the context map passed to `web_request` back with the
//! result, which is the only link between a response and the request that
//! produced it. Each request is tagged with its `kind` and key (`term` or
//! `imdb_id`); responses without a recognizable tag belong to someone else.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

use super::{FetchCompletion, FetchRequest};
use crate::domain::{FetchError, MovieBrowserError};

pub const KIND_KEY: &str = "kind";
pub const TERM_KEY: &str = "term";
pub const IMDB_ID_KEY: &str = "imdb_id";

const SEARCH_KIND: &str = "moviebrowser.search";
const DETAILS_KIND: &str = "moviebrowser.details";

/// Builds the context map that identifies `request` in its response.
#[must_use]
pub fn request_context(request: &FetchRequest) -> BTreeMap<String, String> {
    let mut context = BTreeMap::new();
    match request {
        FetchRequest::Search { term } => {
            context.insert(KIND_KEY.to_string(), SEARCH_KIND.to_string());
            context.insert(TERM_KEY.to_string(), term.clone());
        }
        FetchRequest::Details { imdb_id } => {
            context.insert(KIND_KEY.to_string(), DETAILS_KIND.to_string());
            context.insert(IMDB_ID_KEY.to_string(), imdb_id.clone());
        }
    }
    context
}

/// Recovers the request a context map was built for.
#[must_use]
pub fn request_from_context(context: &BTreeMap<String, String>) -> Option<FetchRequest> {
    match context.get(KIND_KEY).map(String::as_str)? {
        SEARCH_KIND => context.get(TERM_KEY).cloned().map(FetchRequest::search),
        DETAILS_KIND => context.get(IMDB_ID_KEY).cloned().map(FetchRequest::details),
        _ => None,
    }
}

/// Turns a raw web response into a completion.
///
/// Returns `None` if `context` does not identify one of our requests. A
/// non-2xx status or a body that is not valid JSON for the route yields an
/// `Err` outcome; a well-formed body is `Ok` even when it reports a logical
/// failure.
#[must_use]
pub fn decode_completion(
    status: u16,
    body: &[u8],
    context: &BTreeMap<String, String>,
) -> Option<FetchCompletion> {
    let completion = match request_from_context(context)? {
        FetchRequest::Search { term } => FetchCompletion::Search {
            term,
            outcome: decode_body(status, body),
        },
        FetchRequest::Details { imdb_id } => FetchCompletion::Details {
            imdb_id,
            outcome: decode_body(status, body),
        },
    };
    Some(completion)
}

fn decode_body<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    serde_json::from_slice(body).map_err(|e| MovieBrowserError::from(e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MovieDetailsEntry, MovieListResult};

    const BATMAN_LIST: &str = r#"{
        "Search": [{"Title": "Batman", "Year": "1989", "imdbID": "tt0096895", "Type": "movie", "Poster": "N/A"}],
        "totalResults": "1",
        "Response": "True"
    }"#;

    fn search_context(term: &str) -> BTreeMap<String, String> {
        request_context(&FetchRequest::search(term))
    }

    #[test]
    fn context_identifies_its_request() {
        let search = FetchRequest::search("star wars");
        let details = FetchRequest::details("tt0076759");

        assert_eq!(request_from_context(&request_context(&search)), Some(search));
        assert_eq!(request_from_context(&request_context(&details)), Some(details));
    }

    #[test]
    fn foreign_context_is_not_ours() {
        let mut context = BTreeMap::new();
        context.insert("kind".to_string(), "something.else".to_string());

        assert_eq!(decode_completion(200, b"{}", &context), None);
        assert_eq!(decode_completion(200, b"{}", &BTreeMap::new()), None);
    }

    #[test]
    fn context_missing_its_key_is_not_ours() {
        let mut context = search_context("batman");
        context.remove(TERM_KEY);

        assert_eq!(decode_completion(200, BATMAN_LIST.as_bytes(), &context), None);
    }

    #[test]
    fn well_formed_search_body_is_ok() {
        let completion =
            decode_completion(200, BATMAN_LIST.as_bytes(), &search_context("batman")).unwrap();

        match completion {
            FetchCompletion::Search { term, outcome } => {
                assert_eq!(term, "batman");
                let result = outcome.unwrap();
                assert!(result.response);
                assert_eq!(result.entries[0].title, "Batman");
            }
            other => panic!("expected search completion, got {other:?}"),
        }
    }

    #[test]
    fn logical_failure_is_still_ok() {
        let body = br#"{"Response": "False", "Error": "Movie not found!"}"#;

        let completion = decode_completion(200, body, &search_context("zzzzzz")).unwrap();

        assert_eq!(
            completion,
            FetchCompletion::Search {
                term: "zzzzzz".to_string(),
                outcome: Ok(MovieListResult {
                    response: false,
                    error: Some("Movie not found!".to_string()),
                    entries: vec![],
                }),
            }
        );
    }

    #[test]
    fn non_success_status_is_transport_failure() {
        let context = request_context(&FetchRequest::details("tt9"));

        let completion = decode_completion(503, b"upstream down", &context).unwrap();

        assert_eq!(
            completion,
            FetchCompletion::Details {
                imdb_id: "tt9".to_string(),
                outcome: Err(FetchError::Status(503)),
            }
        );
    }

    #[test]
    fn malformed_body_is_transport_failure() {
        let context = request_context(&FetchRequest::details("tt1"));

        let completion = decode_completion(200, b"<html>oops</html>", &context).unwrap();

        match completion {
            FetchCompletion::Details { outcome, .. } => {
                assert!(matches!(outcome, Err(FetchError::Decode(_))));
            }
            other => panic!("expected details completion, got {other:?}"),
        }
    }

    #[test]
    fn details_body_decodes() {
        let body = br#"{"Title": "Batman", "Year": "1989", "imdbRating": "7.5", "imdbID": "tt0096895", "Response": "True"}"#;
        let context = request_context(&FetchRequest::details("tt0096895"));

        let completion = decode_completion(200, body, &context).unwrap();

        let FetchCompletion::Details { outcome, .. } = completion else {
            panic!("expected details completion");
        };
        let movie: MovieDetailsEntry = outcome.unwrap();
        assert_eq!(movie.imdb_rating, Some(7.5));
        assert!(movie.response);
    }
}

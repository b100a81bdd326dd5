//! URL construction for the backend routes.
//!
//! The term or identifier is appended as a single percent-encoded path
//! segment, so spaces, slashes and `?` in a search cannot change the route.
//! A base URL with a path prefix (`http://host/proxy/`) keeps that prefix.

use crate::domain::{MovieBrowserError, Result};
use url::Url;

/// Parses and checks a backend base URL.
///
/// # Errors
///
/// Returns [`MovieBrowserError::Config`] if `api_url` is not an absolute
/// `http`/`https` URL.
pub fn parse_base(api_url: &str) -> Result<Url> {
    let url = Url::parse(api_url.trim())
        .map_err(|e| MovieBrowserError::Config(format!("invalid api_url {api_url:?}: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(MovieBrowserError::Config(format!(
            "api_url must use http or https, got {other:?}"
        ))),
    }
}

/// `{base}/api/movies/search/{term}`
///
/// # Errors
///
/// Returns an error if `base` cannot carry a path.
pub fn search_url(base: &Url, term: &str) -> Result<Url> {
    with_segments(base, &["api", "movies", "search", term])
}

/// `{base}/api/movies/{imdb_id}`
///
/// # Errors
///
/// Returns an error if `base` cannot carry a path.
pub fn details_url(base: &Url, imdb_id: &str) -> Result<Url> {
    with_segments(base, &["api", "movies", imdb_id])
}

fn with_segments(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| MovieBrowserError::Config(format!("{base} cannot be a base URL")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

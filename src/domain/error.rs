//! Error types for the movie browser plugin.
//!
//! [`MovieBrowserError`] is the crate-wide error, with the [`Result`] alias used
//! by fallible operations. [`FetchError`] is narrower: it describes why a single
//! backend request did not produce a usable body and travels inside fetch
//! completions until the operation layer turns it into a `*Failed` event.

use thiserror::Error;

/// The main error type for movie browser operations.
///
/// # Examples
///
/// ```
/// use moviebrowser::domain::MovieBrowserError;
///
/// fn validate_config() -> Result<(), MovieBrowserError> {
///     Err(MovieBrowserError::Config("api_url is not a valid URL".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum MovieBrowserError {
    /// A request could not be handed to the host.
    ///
    /// Raised by a fetcher before anything reaches the network, for example
    /// when the plugin lacks web access.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request itself is invalid and was never sent.
    ///
    /// Mirrors the backend's own argument checks (search too short, missing
    /// identifier) so obviously doomed requests do not leave the plugin.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A response body could not be parsed.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Why a backend request failed on the transport channel.
///
/// This never reaches application state verbatim. The operation layer logs it
/// and records the fixed failure message instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The backend answered with a non-2xx status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The body was not valid UTF-8 JSON of the expected shape.
    #[error("malformed response body: {0}")]
    Decode(String),

    /// The request could not be issued at all.
    #[error("request not sent: {0}")]
    Request(String),
}

impl From<MovieBrowserError> for FetchError {
    fn from(error: MovieBrowserError) -> Self {
        match error {
            MovieBrowserError::Decode(e) => Self::Decode(e.to_string()),
            other => Self::Request(other.to_string()),
        }
    }
}

/// A specialized `Result` type for movie browser operations.
pub type Result<T> = std::result::Result<T, MovieBrowserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_keep_their_category_as_fetch_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let fetch: FetchError = MovieBrowserError::from(json_err).into();
        assert!(matches!(fetch, FetchError::Decode(_)));
    }

    #[test]
    fn other_errors_become_request_failures() {
        let fetch: FetchError =
            MovieBrowserError::InvalidRequest("imdbID not provided".to_string()).into();
        assert_eq!(
            fetch,
            FetchError::Request("Invalid request: imdbID not provided".to_string())
        );
    }
}

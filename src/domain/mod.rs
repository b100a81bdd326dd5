//! Domain layer for the movie browser plugin.
//!
//! Core types independent of Zellij APIs: the movie database records served
//! by the backend and the crate's error types.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`movie`]: Search result and movie detail records, fetch status wrapper
//!
//! # Examples
//!
//! ```
//! use moviebrowser::domain::{Fetched, MovieListResult};
//!
//! let results: Fetched<MovieListResult> = Fetched::default();
//! assert!(!results.response());
//! assert!(results.entries().is_empty());
//! ```

pub mod error;
pub mod movie;

pub use error::{FetchError, MovieBrowserError, Result};
pub use movie::{
    Fetched, MovieDetailsEntry, MovieListEntry, MovieListResult, Rating, WireResponse,
    FAILED_TO_RETRIEVE,
};

//! moviebrowser: a Zellij plugin for searching a movie database and reading
//! movie details without leaving the terminal.
//!
//! The plugin talks to a small HTTP backend that proxies the OMDb API (the
//! API key stays on the backend):
//!
//! - `GET {api_url}/api/movies/search/{term}` for title searches
//! - `GET {api_url}/api/movies/{imdbID}` for a single movie
//!
//! It keeps the five most recent searches in memory and lets the user re-run
//! them from the history list.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Key mapping and event handling                   │
//! │  - Search / details reducers and the store          │
//! │  - Operations issuing fetches                       │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                       │
//! ┌───────────────┐                       ┌───────────────┐
//! │ UI Layer      │                       │ API Layer     │
//! │ (ui/)         │                       │ (api/)        │
//! │ - Rendering   │                       │ - Endpoints   │
//! │ - Theming     │                       │ - web_request │
//! │ - Components  │                       │ - Decoding    │
//! └───────────────┘                       └───────────────┘
//!         │                                       │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Movie records (domain/movie)                     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Request flow
//!
//! Fetches never block. An operation dispatches its "requested" event, asks
//! the [`api::MovieFetcher`] to issue the request and returns. The host later
//! delivers the HTTP response as a plugin event; [`api::protocol`] decodes it
//! into a completion that [`app::complete_fetch`] turns into exactly one
//! received/failed event. Responses for a term or id that is no longer
//! current are dropped by the reducers.
//!
//! # Modules
//!
//! - [`api`]: Fetch requests, endpoints, the Zellij HTTP client
//! - [`app`]: State slices, reducers, operations, handler
//! - [`domain`]: Movie records and errors
//! - [`infrastructure`]: Sandbox paths
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Tracing setup
//!
//! # Example
//!
//! ```rust
//! use moviebrowser::app::{search_movies, Dispatch, Store};
//! use moviebrowser::api::{FetchRequest, MovieFetcher};
//!
//! #[derive(Default)]
//! struct Queue(Vec<FetchRequest>);
//!
//! impl MovieFetcher for Queue {
//!     fn request(&mut self, request: FetchRequest) -> moviebrowser::Result<()> {
//!         self.0.push(request);
//!         Ok(())
//!     }
//! }
//!
//! let mut store = Store::new();
//! let mut fetcher = Queue::default();
//! search_movies(&mut store, &mut fetcher, "batman");
//!
//! assert!(store.search_state().is_loading);
//! assert_eq!(fetcher.0, vec![FetchRequest::search("batman")]);
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, map_key, Action, AppState, Event, Focus, Screen};
pub use domain::{MovieBrowserError, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

use url::Url;

/// Backend used when `api_url` is missing or invalid.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/moviebrowser.wasm" {
///     api_url "http://localhost:5000"
///     theme "catppuccin-mocha"
///     theme_file "~/.config/zellij/moviebrowser-theme.toml"
///     trace_level "debug"
///     search "batman"
///     movie "tt0372784"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the movie backend. Default: `http://localhost:5000`
    pub api_url: Url,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme, `~` expanded to the sandbox host root.
    pub theme_file: Option<String>,

    /// `EnvFilter` directives for tracing. Default: `"info"`
    pub trace_level: Option<String>,

    /// Search run as soon as web access is granted.
    pub initial_search: Option<String>,

    /// Movie opened as soon as web access is granted; wins over `search`.
    pub initial_movie: Option<String>,
}

impl Default for Config {
    /// # Panics
    ///
    /// Panics if [`DEFAULT_API_URL`] does not parse (it always does).
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default api url should always parse"),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            initial_search: None,
            initial_movie: None,
        }
    }
}

impl Config {
    /// Parses the configuration map Zellij passes to `load`.
    ///
    /// Blank values count as unset. An `api_url` that is not an http(s) URL
    /// is logged and replaced by the default.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use moviebrowser::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_url".to_string(), "https://movies.example.com".to_string());
    /// map.insert("search".to_string(), "batman".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_url.as_str(), "https://movies.example.com/");
    /// assert_eq!(config.initial_search.as_deref(), Some("batman"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let api_url = value("api_url").map_or_else(
            || Self::default().api_url,
            |raw| {
                api::endpoints::parse_base(&raw).unwrap_or_else(|e| {
                    tracing::warn!(api_url = %raw, error = %e, "invalid api_url, using default");
                    Self::default().api_url
                })
            },
        );

        Self {
            api_url,
            theme_name: value("theme"),
            theme_file: value("theme_file").map(|path| infrastructure::expand_tilde(&path)),
            trace_level: value("trace_level"),
            initial_search: value("search"),
            initial_movie: value("movie"),
        }
    }
}

/// Builds the initial application state for `config`.
///
/// The theme comes from `theme_file`, then `theme`, then the default. A theme
/// that fails to load is logged and replaced by the default.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_url = %config.api_url, "initializing moviebrowser plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme)
}

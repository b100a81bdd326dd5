//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain/api
//! layers.
//!
//! # Architecture
//!
//! ```text
//! Key → keymap → Event → handle_event → operations → Store (reducers)
//!                  ↑                         │
//!                  │                         ▼
//!         FetchCompleted ←── host ←── MovieFetcher::request
//! ```
//!
//! State lives in two slices. The [`search`] and [`details`] reducers are pure
//! functions; [`store`] routes events to them in dispatch order. The
//! [`operations`] issue backend requests and turn their answers back into
//! events. [`AppState`] adds the UI-only state on top.
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`details`]: Details slice and reducer
//! - [`handler`]: Event processing and UI state transitions
//! - [`keymap`]: Focus-dependent key bindings
//! - [`modes`]: Screen and focus types
//! - [`operations`]: Search, load and completion operations
//! - [`search`]: Search slice, reducer and history
//! - [`state`]: Application state container and view model computation
//! - [`store`]: Slice composition and the dispatch seam

pub mod actions;
pub mod details;
pub mod handler;
pub mod keymap;
pub mod modes;
pub mod operations;
pub mod search;
pub mod state;
pub mod store;

pub use actions::Action;
pub use details::{DetailsEvent, DetailsState};
pub use handler::{handle_event, Event};
pub use keymap::map_key;
pub use modes::{Focus, Screen};
pub use operations::{
    complete_fetch, invalidate_search, load_movie, search_movies, submit_search,
    update_search_input,
};
pub use search::{SearchEvent, SearchRecord, SearchState, HISTORY_CAP, MIN_SEARCH_LENGTH};
pub use state::AppState;
pub use store::{AppEvent, Dispatch, Store};

//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point between the plugin shim and the
//! application. Key events arrive already translated by
//! [`keymap`](super::keymap) into intents that no longer depend on the raw
//! key. Backend answers arrive as [`Event::FetchCompleted`].
//!
//! # Flow
//!
//! 1. UI-only state (screen, focus, cursors) is updated in place
//! 2. Anything touching search or details goes through an operation, which
//!    dispatches into the [`Store`](super::store::Store) and may issue a
//!    request through the fetcher
//! 3. The handler returns whether to re-render plus any host actions
//!
//! # Example
//!
//! ```rust,ignore
//! use moviebrowser::app::{handle_event, AppState, Event};
//! use moviebrowser::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (render, actions) = handle_event(&mut state, &mut fetcher, &Event::Char('b'))?;
//! ```

use super::modes::{Focus, Screen};
use super::operations::{
    complete_fetch, load_movie, search_movies, submit_search, update_search_input,
};
use super::search::MIN_SEARCH_LENGTH;
use crate::api::{FetchCompletion, MovieFetcher};
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Intents produced by the key map, the host, or the fetcher.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Appends a character to the search box.
    Char(char),
    /// Removes the last character from the search box.
    Backspace,
    /// Submits the search box contents.
    SubmitSearch,

    FocusInput,
    FocusResults,
    FocusHistory,

    /// Moves the cursor of the focused list down (wraps to top).
    MoveDown,
    /// Moves the cursor of the focused list up (wraps to bottom).
    MoveUp,

    /// Opens the selected result, or re-runs the selected history entry.
    Select,
    /// Returns from the details screen to the search screen.
    Back,
    /// Hides the plugin pane.
    CloseFocus,

    /// Runs a search for the given term, e.g. from plugin configuration.
    Search(String),
    /// Opens the details screen for the given identifier.
    OpenMovie(String),

    /// The answer to an earlier backend request.
    FetchCompleted(FetchCompletion),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. Actions are host side effects to run in order.
///
/// # Errors
///
/// Currently never fails: request failures are turned into state by the
/// operations.
#[allow(clippy::too_many_lines)]
pub fn handle_event<F>(
    state: &mut AppState,
    fetcher: &mut F,
    event: &Event,
) -> Result<(bool, Vec<Action>)>
where
    F: MovieFetcher + ?Sized,
{
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Char(c) => {
            if state.screen != Screen::Search || !state.focus.is_typing() {
                return Ok((false, vec![]));
            }
            let mut input = state.store.search().search_input.clone();
            input.push(*c);
            tracing::trace!(input = %input, "search input updated");
            update_search_input(&mut state.store, &input);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.screen != Screen::Search || !state.focus.is_typing() {
                return Ok((false, vec![]));
            }
            let mut input = state.store.search().search_input.clone();
            if input.pop().is_none() {
                return Ok((false, vec![]));
            }
            update_search_input(&mut state.store, &input);
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            submit_from_input(state, fetcher);
            Ok((true, vec![]))
        }
        Event::FocusInput => {
            state.screen = Screen::Search;
            state.focus = Focus::Input;
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            state.screen = Screen::Search;
            state.focus = Focus::Results;
            Ok((true, vec![]))
        }
        Event::FocusHistory => {
            state.screen = Screen::Search;
            if state.store.search().search_history.is_empty() {
                tracing::debug!("history empty, keeping focus");
                return Ok((false, vec![]));
            }
            state.focus = Focus::History;
            state.selected_history = state.store.search().search_history.len() - 1;
            Ok((true, vec![]))
        }
        Event::MoveDown | Event::MoveUp => {
            if state.screen != Screen::Search {
                return Ok((false, vec![]));
            }
            if state.focus.is_typing() {
                state.focus = Focus::Results;
            } else if matches!(event, Event::MoveDown) {
                state.move_selection_down();
            } else {
                state.move_selection_up();
            }
            Ok((true, vec![]))
        }
        Event::Select => match (state.screen, state.focus) {
            (Screen::Details, _) => Ok((false, vec![])),
            (Screen::Search, Focus::Input) => {
                submit_from_input(state, fetcher);
                Ok((true, vec![]))
            }
            (Screen::Search, Focus::Results) => {
                let Some(imdb_id) = state.selected_entry().map(|entry| entry.imdb_id.clone()) else {
                    tracing::debug!("no result selected");
                    return Ok((false, vec![]));
                };
                tracing::debug!(imdb_id = %imdb_id, "opening movie");
                open_movie(state, fetcher, &imdb_id);
                Ok((true, vec![]))
            }
            (Screen::Search, Focus::History) => {
                let Some(term) = state.selected_history_term().map(str::to_string) else {
                    return Ok((false, vec![]));
                };
                tracing::debug!(term = %term, "re-running search from history");
                run_search(state, fetcher, &term);
                Ok((true, vec![]))
            }
        },
        Event::Back => {
            if state.screen == Screen::Search {
                return Ok((false, vec![]));
            }
            state.screen = Screen::Search;
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Search(term) => {
            run_search(state, fetcher, term);
            Ok((true, vec![]))
        }
        Event::OpenMovie(imdb_id) => {
            open_movie(state, fetcher, imdb_id);
            Ok((true, vec![]))
        }
        Event::FetchCompleted(completion) => {
            complete_fetch(&mut state.store, completion.clone());
            Ok((true, vec![]))
        }
    }
}

fn submit_from_input<F: MovieFetcher + ?Sized>(state: &mut AppState, fetcher: &mut F) {
    let long_enough = state.store.search().search_input.chars().count() >= MIN_SEARCH_LENGTH;
    let was_current = state
        .store
        .search()
        .is_current(&state.store.search().search_input);

    submit_search(&mut state.store, fetcher);

    if long_enough {
        state.focus = Focus::Results;
        if !was_current {
            state.selected_result = 0;
        }
    }
}

fn run_search<F: MovieFetcher + ?Sized>(state: &mut AppState, fetcher: &mut F, term: &str) {
    if !state.store.search().is_current(term) {
        state.selected_result = 0;
    }
    search_movies(&mut state.store, fetcher, term);
    state.screen = Screen::Search;
    state.focus = Focus::Results;
}

fn open_movie<F: MovieFetcher + ?Sized>(state: &mut AppState, fetcher: &mut F, imdb_id: &str) {
    if imdb_id.trim().is_empty() {
        tracing::debug!("result has no imdb id, staying on search");
        return;
    }
    load_movie(&mut state.store, fetcher, imdb_id);
    state.screen = Screen::Details;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FetchRequest;
    use crate::app::store::Dispatch;
    use crate::domain::{MovieBrowserError, MovieListEntry, MovieListResult};
    use crate::ui::Theme;

    #[derive(Default)]
    struct Fetcher {
        sent: Vec<FetchRequest>,
    }

    impl MovieFetcher for Fetcher {
        fn request(&mut self, request: FetchRequest) -> Result<()> {
            request.validate()?;
            self.sent.push(request);
            Ok(())
        }
    }

    struct Offline;

    impl MovieFetcher for Offline {
        fn request(&mut self, _request: FetchRequest) -> Result<()> {
            Err(MovieBrowserError::Transport("offline".to_string()))
        }
    }

    fn results(term: &str) -> Event {
        Event::FetchCompleted(FetchCompletion::Search {
            term: term.to_string(),
            outcome: Ok(MovieListResult {
                response: true,
                error: None,
                entries: vec![
                    MovieListEntry {
                        imdb_id: "tt0096895".to_string(),
                        title: "Batman".to_string(),
                        ..MovieListEntry::default()
                    },
                    MovieListEntry {
                        imdb_id: "tt0103776".to_string(),
                        title: "Batman Returns".to_string(),
                        ..MovieListEntry::default()
                    },
                ],
            }),
        })
    }

    fn type_text(state: &mut AppState, fetcher: &mut Fetcher, text: &str) {
        for c in text.chars() {
            handle_event(state, fetcher, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn typing_edits_search_input() {
        let mut state = AppState::new(Theme::default());
        let mut fetcher = Fetcher::default();

        type_text(&mut state, &mut fetcher, "batmn");
        handle_event(&mut state, &mut fetcher, &Event::Backspace).unwrap();
        type_text(&mut state, &mut fetcher, "an");

        assert_eq!(state.store.search_state().search_input, "batman");
        assert!(fetcher.sent.is_empty());
    }

    #[test]
    fn chars_are_ignored_outside_input() {
        let mut state = AppState::new(Theme::default());
        let mut fetcher = Fetcher::default();
        state.focus = Focus::Results;

        let (render, _) = handle_event(&mut state, &mut fetcher, &Event::Char('j')).unwrap();

        assert!(!render);
        assert_eq!(state.store.search_state().search_input, "");
    }

    #[test]
    fn short_submit_invalidates_and_keeps_focus() {
        let mut state = AppState::new(Theme::default());
        let mut fetcher = Fetcher::default();
        type_text(&mut state, &mut fetcher, "bat");

        handle_event(&mut state, &mut fetcher, &Event::SubmitSearch).unwrap();

        assert!(!state.store.search_state().is_search_valid);
        assert_eq!(state.focus, Focus::Input);
        assert!(fetcher.sent.is_empty());
    }

    #[test]
    fn submit_searches_and_focuses_results() {
        let mut state = AppState::new(Theme::default());
        let mut fetcher = Fetcher::default();
        type_text(&mut state, &mut fetcher, "batman");

        handle_event(&mut state, &mut fetcher, &Event::SubmitSearch).unwrap();

        assert_eq!(fetcher.sent, vec![FetchRequest::search("batman")]);
        assert_eq!(state.focus, Focus::Results);
        assert!(state.store.search_state().is_loading);
    }

    #[test]
    fn enter_on_result_opens_details_once() {
        let mut state = AppState::new(Theme::default());
        let mut fetcher = Fetcher::default();
        handle_event(&mut state, &mut fetcher, &Event::Search("batman".to_string())).unwrap();
        handle_event(&mut state, &mut fetcher, &results("batman")).unwrap();
        handle_event(&mut state, &mut fetcher, &Event::MoveDown).unwrap();

        handle_event(&mut state, &mut fetcher, &Event::Select).unwrap();
        handle_event(&mut state, &mut fetcher, &Event::Back).unwrap();
        handle_event(&mut state, &mut fetcher, &Event::Select).unwrap();

        assert_eq!(state.screen, Screen::Details);
        assert_eq!(
            fetcher.sent,
            vec![FetchRequest::search("batman"), FetchRequest::details("tt0103776")]
        );
    }

    #[test]
    fn select_without_results_does_nothing() {
        let mut state = AppState::new(Theme::default());
        let mut fetcher = Fetcher::default();
        state.focus = Focus::Results;

        let (render, actions) = handle_event(&mut state, &mut fetcher, &Event::Select).unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.screen, Screen::Search);
    }

    #[test]
    fn history_entry_reruns_search() {
        let mut state = AppState::new(Theme::default());
        let mut fetcher = Fetcher::default();
        handle_event(&mut state, &mut fetcher, &Event::Search("batman".to_string())).unwrap();
        handle_event(&mut state, &mut fetcher, &Event::Search("superman".to_string())).unwrap();

        handle_event(&mut state, &mut fetcher, &Event::FocusHistory).unwrap();
        handle_event(&mut state, &mut fetcher, &Event::MoveUp).unwrap();
        handle_event(&mut state, &mut fetcher, &Event::Select).unwrap();

        assert_eq!(state.store.search_state().search.as_deref(), Some("batman"));
        assert_eq!(state.store.search_state().search_history.len(), 3);
        assert_eq!(state.focus, Focus::Results);
        assert_eq!(fetcher.sent.len(), 3);
    }

    #[test]
    fn focus_history_needs_entries() {
        let mut state = AppState::new(Theme::default());
        let mut fetcher = Fetcher::default();

        let (render, _) = handle_event(&mut state, &mut fetcher, &Event::FocusHistory).unwrap();

        assert!(!render);
        assert_eq!(state.focus, Focus::Input);
    }

    #[test]
    fn move_from_input_focuses_results() {
        let mut state = AppState::new(Theme::default());
        let mut fetcher = Fetcher::default();

        handle_event(&mut state, &mut fetcher, &Event::MoveDown).unwrap();

        assert_eq!(state.focus, Focus::Results);
        assert_eq!(state.selected_result, 0);
    }

    #[test]
    fn close_emits_action() {
        let mut state = AppState::new(Theme::default());
        let mut fetcher = Fetcher::default();

        let (render, actions) = handle_event(&mut state, &mut fetcher, &Event::CloseFocus).unwrap();

        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn offline_open_movie_shows_failure() {
        let mut state = AppState::new(Theme::default());

        handle_event(&mut state, &mut Offline, &Event::OpenMovie("tt1".to_string())).unwrap();

        assert_eq!(state.screen, Screen::Details);
        assert!(!state.store.details_state().is_loading);
        assert_eq!(
            state.store.details_state().movie,
            crate::domain::Fetched::transport_failure()
        );
    }

    #[test]
    fn blank_movie_id_stays_on_search() {
        let mut state = AppState::new(Theme::default());
        let mut fetcher = Fetcher::default();

        handle_event(&mut state, &mut fetcher, &Event::OpenMovie(String::new())).unwrap();

        assert_eq!(state.screen, Screen::Search);
        assert!(fetcher.sent.is_empty());
        assert_eq!(state.store.details_state().imdb_id, None);
    }

    #[test]
    fn back_on_search_screen_is_noop() {
        let mut state = AppState::new(Theme::default());
        let mut fetcher = Fetcher::default();

        let (render, _) = handle_event(&mut state, &mut fetcher, &Event::Back).unwrap();

        assert!(!render);
    }
}

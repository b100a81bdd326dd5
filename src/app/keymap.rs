//! Translation of raw key presses into handler [`Event`]s.
//!
//! The same key means different things depending on the screen and focus:
//! `j` is typed into the search box while it has focus and moves the cursor
//! everywhere else. `Ctrl+n`/`Ctrl+p` navigate regardless of focus.
//!
//! | Focus / screen | Keys                                                              |
//! |----------------|-------------------------------------------------------------------|
//! | Input          | chars, Backspace, Enter: search, Tab/Down: results                |
//! | Results        | j/k, Enter: details, `/`: input, h/Tab: history, Esc: input, q    |
//! | History        | j/k, Enter: search again, `/`: input, l/Tab: results, Esc: input, q |
//! | Details        | Esc/Backspace/b: back, q                                          |

use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

use super::handler::Event;
use super::modes::{Focus, Screen};
use super::AppState;

/// Maps a key press to an event, or `None` if the key is unbound here.
#[must_use]
pub fn map_key(state: &AppState, key: &KeyWithModifier) -> Option<Event> {
    tracing::debug!(bare_key = ?key.bare_key, screen = ?state.screen, focus = ?state.focus, "key event");

    if key.has_modifiers(&[KeyModifier::Ctrl]) {
        return match key.bare_key {
            BareKey::Char('n') => Some(Event::MoveDown),
            BareKey::Char('p') => Some(Event::MoveUp),
            _ => None,
        };
    }

    match state.screen {
        Screen::Details => map_details_key(key.bare_key),
        Screen::Search => match state.focus {
            Focus::Input => map_input_key(key.bare_key),
            Focus::Results => map_results_key(key.bare_key),
            Focus::History => map_history_key(key.bare_key),
        },
    }
}

fn map_input_key(key: BareKey) -> Option<Event> {
    Some(match key {
        BareKey::Enter => Event::SubmitSearch,
        BareKey::Tab | BareKey::Down => Event::FocusResults,
        BareKey::Backspace => Event::Backspace,
        BareKey::Char(c) => Event::Char(c),
        _ => return None,
    })
}

fn map_results_key(key: BareKey) -> Option<Event> {
    Some(match key {
        BareKey::Down | BareKey::Char('j') => Event::MoveDown,
        BareKey::Up | BareKey::Char('k') => Event::MoveUp,
        BareKey::Enter => Event::Select,
        BareKey::Esc | BareKey::Char('/') => Event::FocusInput,
        BareKey::Tab | BareKey::Char('h') => Event::FocusHistory,
        BareKey::Char('q') => Event::CloseFocus,
        _ => return None,
    })
}

fn map_history_key(key: BareKey) -> Option<Event> {
    Some(match key {
        BareKey::Down | BareKey::Char('j') => Event::MoveDown,
        BareKey::Up | BareKey::Char('k') => Event::MoveUp,
        BareKey::Enter => Event::Select,
        BareKey::Esc | BareKey::Char('/') => Event::FocusInput,
        BareKey::Tab | BareKey::Char('l') => Event::FocusResults,
        BareKey::Char('q') => Event::CloseFocus,
        _ => return None,
    })
}

fn map_details_key(key: BareKey) -> Option<Event> {
    Some(match key {
        BareKey::Esc | BareKey::Backspace | BareKey::Char('b') => Event::Back,
        BareKey::Char('q') => Event::CloseFocus,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Theme;

    fn key(bare: BareKey) -> KeyWithModifier {
        KeyWithModifier::new(bare)
    }

    fn state(screen: Screen, focus: Focus) -> AppState {
        let mut state = AppState::new(Theme::default());
        state.screen = screen;
        state.focus = focus;
        state
    }

    #[test]
    fn letters_are_typed_in_input() {
        let state = state(Screen::Search, Focus::Input);

        assert_eq!(map_key(&state, &key(BareKey::Char('j'))), Some(Event::Char('j')));
        assert_eq!(map_key(&state, &key(BareKey::Char('q'))), Some(Event::Char('q')));
        assert_eq!(map_key(&state, &key(BareKey::Enter)), Some(Event::SubmitSearch));
    }

    #[test]
    fn letters_navigate_in_results() {
        let state = state(Screen::Search, Focus::Results);

        assert_eq!(map_key(&state, &key(BareKey::Char('j'))), Some(Event::MoveDown));
        assert_eq!(map_key(&state, &key(BareKey::Char('/'))), Some(Event::FocusInput));
        assert_eq!(map_key(&state, &key(BareKey::Char('h'))), Some(Event::FocusHistory));
        assert_eq!(map_key(&state, &key(BareKey::Char('q'))), Some(Event::CloseFocus));
    }

    #[test]
    fn ctrl_navigation_works_everywhere() {
        let typing = state(Screen::Search, Focus::Input);
        let ctrl_n = KeyWithModifier::new(BareKey::Char('n')).with_ctrl_modifier();

        assert_eq!(map_key(&typing, &ctrl_n), Some(Event::MoveDown));
    }

    #[test]
    fn details_keys_go_back() {
        let state = state(Screen::Details, Focus::Results);

        assert_eq!(map_key(&state, &key(BareKey::Esc)), Some(Event::Back));
        assert_eq!(map_key(&state, &key(BareKey::Char('b'))), Some(Event::Back));
        assert_eq!(map_key(&state, &key(BareKey::Char('j'))), None);
    }
}

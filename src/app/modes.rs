//! Screen and focus state for the plugin UI.
//!
//! The plugin shows one of two screens. The search screen is split into three
//! focusable areas, and the focus decides how keys are interpreted:
//!
//! - **Input**: printable keys edit the search box
//! - **Results**: `j`/`k` move through the result rows, Enter opens a movie
//! - **History**: `j`/`k` move through past searches, Enter re-runs one
//!
//! # Example
//!
//! ```rust
//! use moviebrowser::app::modes::{Focus, Screen};
//!
//! let screen = Screen::Search;
//! let focus = Focus::Input;
//! assert!(focus.is_typing());
//! # let _ = screen;
//! ```

/// Which screen is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Search box, result table and history.
    #[default]
    Search,
    /// One movie's full record.
    Details,
}

/// Focused area of the search screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Results,
    History,
}

impl Focus {
    /// `true` while keystrokes go to the search box.
    #[must_use]
    pub const fn is_typing(self) -> bool {
        matches!(self, Self::Input)
    }
}

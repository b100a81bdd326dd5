//! View model types representing renderable UI state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) and consumed
//! by the renderer. They hold display-ready text only: every message, label and
//! highlight range is decided during computation, so rendering is a matter of
//! placing strings on the screen.
//!
//! # Example
//!
//! ```rust
//! use moviebrowser::ui::viewmodel::{StatusLine, Tone};
//!
//! let status = StatusLine::new("Loading...", Tone::Dim);
//! assert_eq!(status.message, "Loading...");
//! ```

/// Shown before the first search.
pub const SEARCH_HINT: &str = "Use searchbar to search for movies! Minimum 5 characters required";
/// Shown in the result table while a search is in flight.
pub const SEARCH_LOADING: &str = "Loading...";
/// Shown on the details screen while a movie is in flight.
pub const DETAILS_LOADING: &str = "Movie details is loading...";
/// Shown when a details response carries no message of its own.
pub const DETAILS_UNKNOWN_ERROR: &str = "Unknown error occured during load";
/// Shown when a movie has no third-party ratings.
pub const NO_RATINGS: &str = "Movie have not received any ratings";

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum UIViewModel {
    Search(SearchViewModel),
    Details(DetailsViewModel),
}

/// Search screen: search box, result table and history list.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    /// Hint shown instead of the table before the first search.
    pub empty_state: Option<EmptyState>,
    /// `Showing results for "..."` once a search has been made.
    pub caption: Option<String>,
    /// Loading or error message shown in place of result rows.
    pub table_message: Option<StatusLine>,
    /// Visible window of result rows.
    pub display_items: Vec<DisplayItem>,
    pub history: Vec<HistoryItem>,
    pub footer: FooterInfo,
}

/// Details screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsViewModel {
    pub header: HeaderInfo,
    pub body: DetailsBody,
    pub footer: FooterInfo,
}

/// What the details screen shows below its header.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailsBody {
    /// Loading or error text, centered.
    Message(StatusLine),
    Movie(MovieView),
}

/// A loaded movie, formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieView {
    pub title: String,
    /// `(1989)`, empty if the backend sent no year.
    pub year: String,
    /// Rated, runtime, genre and release date joined by ` | `.
    pub short_description: String,
    /// `7.5/10`, `None` when unrated.
    pub rating: Option<String>,
    /// IMDb vote count as sent by the backend (`1,567,213`).
    pub votes: String,
    /// Plot summary, wrapped by the renderer.
    pub plot: String,
    /// Labelled rows in display order.
    pub fields: Vec<DetailField>,
    /// One `Source : Value` line per rating.
    pub ratings: Vec<String>,
    /// Set when `ratings` is empty.
    pub ratings_message: Option<String>,
}

/// A labelled value on the details screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// Display information for a single search result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Title, truncated to its column.
    pub title: String,
    /// Release year or year range.
    pub year: String,
    /// `movie`, `series` or `episode`.
    pub kind: String,
    /// Highlighted only while the results list has focus.
    pub is_selected: bool,

    /// Character ranges of `title` matching the search term.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices, clipped
    /// to the truncated title.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// One past search in the history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    /// Term as it was submitted.
    pub search_term: String,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Centered two-line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search box contents and styling flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// Drawn with the invalid border color when `false`.
    pub is_valid: bool,
    pub is_focused: bool,
    /// Suffix `[searching]` while a search is in flight.
    pub is_loading: bool,
}

/// How a status line is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Dim,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub tone: Tone,
}

impl StatusLine {
    #[must_use]
    pub fn new(message: impl Into<String>, tone: Tone) -> Self {
        Self {
            message: message.into(),
            tone,
        }
    }
}

//! Application state and view model computation.
//!
//! [`AppState`] wraps the [`Store`] with the UI-only state the reducers do not
//! care about: which screen is shown, which area has focus and where the
//! selection cursors sit. View models are computed on demand from a snapshot.
//!
//! # Example
//!
//! ```rust
//! use moviebrowser::app::AppState;
//! use moviebrowser::ui::Theme;
//!
//! let state = AppState::new(Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! # let _ = viewmodel;
//! ```

use fuzzy_matcher::skim::SkimMatcherV2;

use super::modes::{Focus, Screen};
use super::store::Store;
use crate::domain::{MovieDetailsEntry, MovieListEntry};
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailField, DetailsBody, DetailsViewModel, DisplayItem, EmptyState, FooterInfo, HeaderInfo,
    HistoryItem, MovieView, SearchBarInfo, SearchViewModel, StatusLine, Tone, UIViewModel,
    DETAILS_LOADING, DETAILS_UNKNOWN_ERROR, NO_RATINGS, SEARCH_HINT, SEARCH_LOADING,
};

/// Width of the year column, wide enough for `2005–2013`.
pub const YEAR_COLUMN_WIDTH: usize = 11;
/// Width of the type column, wide enough for `episode`.
pub const TYPE_COLUMN_WIDTH: usize = 8;

/// Lines above the result rows: blank, header, border, search box (3),
/// caption, column headers.
const SEARCH_CHROME_TOP: usize = 8;
/// Border and footer.
const SEARCH_CHROME_BOTTOM: usize = 2;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search and details slices.
    pub store: Store,

    pub screen: Screen,

    /// Focused area of the search screen. Kept while the details screen is
    /// shown so going back restores it.
    pub focus: Focus,

    /// Cursor within the current result rows.
    ///
    /// Clamped on read, so it stays valid when a shorter result list arrives.
    pub selected_result: usize,

    /// Cursor within the search history.
    pub selected_history: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            store: Store::new(),
            screen: Screen::Search,
            focus: Focus::Input,
            selected_result: 0,
            selected_history: 0,
            theme,
        }
    }

    /// Moves the cursor of the focused list down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.focused_list_len();
        if len == 0 {
            return;
        }
        let cursor = self.focused_cursor_mut();
        *cursor = ((*cursor).min(len - 1) + 1) % len;
    }

    /// Moves the cursor of the focused list up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.focused_list_len();
        if len == 0 {
            return;
        }
        let cursor = self.focused_cursor_mut();
        let current = (*cursor).min(len - 1);
        *cursor = if current == 0 { len - 1 } else { current - 1 };
    }

    /// Index of the selected result row, clamped to the current results.
    #[must_use]
    pub fn selected_result_index(&self) -> usize {
        let len = self.store.search().results.entries().len();
        self.selected_result.min(len.saturating_sub(1))
    }

    /// The currently selected result row, if any.
    #[must_use]
    pub fn selected_entry(&self) -> Option<&MovieListEntry> {
        let search = self.store.search();
        if search.is_loading || !search.results.response() {
            return None;
        }
        search.results.entries().get(self.selected_result_index())
    }

    /// The currently selected history term, if any.
    #[must_use]
    pub fn selected_history_term(&self) -> Option<&str> {
        let history = &self.store.search().search_history;
        let index = self.selected_history.min(history.len().saturating_sub(1));
        history.get(index).map(|record| record.search_term.as_str())
    }

    fn focused_list_len(&self) -> usize {
        match self.focus {
            Focus::Input => 0,
            Focus::Results => self.store.search().results.entries().len(),
            Focus::History => self.store.search().search_history.len(),
        }
    }

    fn focused_cursor_mut(&mut self) -> &mut usize {
        match self.focus {
            Focus::Input | Focus::Results => &mut self.selected_result,
            Focus::History => &mut self.selected_history,
        }
    }

    /// Computes a renderable view model for the current screen.
    ///
    /// # Windowing
    ///
    /// On the search screen only as many result rows as fit between the
    /// column headers and the history list are emitted. The window is
    /// centered on the selected row and shifted to stay full near the end of
    /// the list.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        match self.screen {
            Screen::Search => UIViewModel::Search(self.compute_search_viewmodel(rows, cols)),
            Screen::Details => UIViewModel::Details(self.compute_details_viewmodel()),
        }
    }

    fn compute_search_viewmodel(&self, rows: usize, cols: usize) -> SearchViewModel {
        let _span = tracing::debug_span!("compute_search_viewmodel", rows, cols).entered();

        let search = self.store.search();
        let history = self.compute_history();

        let search_bar = SearchBarInfo {
            query: search.search_input.clone(),
            is_valid: search.is_search_valid,
            is_focused: self.focus.is_typing(),
            is_loading: search.is_loading,
        };

        let mut viewmodel = SearchViewModel {
            header: HeaderInfo {
                title: " Movie Browser ".to_string(),
            },
            search_bar,
            empty_state: None,
            caption: None,
            table_message: None,
            display_items: vec![],
            history,
            footer: self.compute_footer(),
        };

        let Some(term) = search.search.as_deref() else {
            viewmodel.empty_state = Some(EmptyState {
                message: SEARCH_HINT.to_string(),
                subtitle: "Type a title and press Enter".to_string(),
            });
            return viewmodel;
        };

        viewmodel.caption = Some(format!("Showing results for \"{term}\""));

        if search.is_loading {
            viewmodel.table_message = Some(StatusLine::new(SEARCH_LOADING, Tone::Dim));
        } else if !search.results.response() {
            viewmodel.table_message = search
                .results
                .error()
                .map(|message| StatusLine::new(message, Tone::Error));
        } else {
            let history_lines = if viewmodel.history.is_empty() {
                0
            } else {
                viewmodel.history.len() + 2
            };
            let available_rows = rows
                .saturating_sub(SEARCH_CHROME_TOP + SEARCH_CHROME_BOTTOM + history_lines)
                .max(1);
            viewmodel.display_items = self.compute_display_items(term, available_rows, cols);
        }

        viewmodel
    }

    fn compute_display_items(&self, term: &str, available_rows: usize, cols: usize) -> Vec<DisplayItem> {
        let entries = self.store.search().results.entries();
        if entries.is_empty() {
            return vec![];
        }

        let selected = self.selected_result_index();
        let mut visible_start = selected.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(entries.len());

        if visible_end - visible_start < available_rows && entries.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let title_width = cols.saturating_sub(YEAR_COLUMN_WIDTH + TYPE_COLUMN_WIDTH + 2).max(8);
        let matcher = SkimMatcherV2::default();
        let results_focused = self.focus == Focus::Results;

        entries[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, entry)| {
                let title = truncate(&entry.title, title_width);
                let highlight_ranges = clip_ranges(
                    highlight_ranges(&entry.title, term, &matcher),
                    title.chars().count(),
                );
                DisplayItem {
                    title,
                    year: truncate(&entry.year, YEAR_COLUMN_WIDTH - 1),
                    kind: truncate(&entry.kind, TYPE_COLUMN_WIDTH),
                    is_selected: results_focused && visible_start + relative_idx == selected,
                    highlight_ranges,
                }
            })
            .collect()
    }

    fn compute_history(&self) -> Vec<HistoryItem> {
        let history = &self.store.search().search_history;
        let selected = self.selected_history.min(history.len().saturating_sub(1));
        let history_focused = self.focus == Focus::History;

        history
            .iter()
            .enumerate()
            .map(|(index, record)| HistoryItem {
                search_term: record.search_term.clone(),
                is_selected: history_focused && index == selected,
            })
            .collect()
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.screen, self.focus) {
            (Screen::Details, _) => "Esc/b: back  q: quit",
            (Screen::Search, Focus::Input) => "Enter: search  Tab/Down: results  Type to edit",
            (Screen::Search, Focus::Results) => {
                "j/k: navigate  Enter: details  /: edit search  h: history  q: quit"
            }
            (Screen::Search, Focus::History) => {
                "j/k: navigate  Enter: search again  /: edit search  Tab: results  q: quit"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_details_viewmodel(&self) -> DetailsViewModel {
        let details = self.store.details();
        let footer = self.compute_footer();

        if details.is_loading {
            return DetailsViewModel {
                header: HeaderInfo {
                    title: " Movie Details ".to_string(),
                },
                body: DetailsBody::Message(StatusLine::new(DETAILS_LOADING, Tone::Dim)),
                footer,
            };
        }

        match details.movie.loaded() {
            Some(movie) if movie.response => DetailsViewModel {
                header: HeaderInfo {
                    title: format!(" {} ", movie.title),
                },
                body: DetailsBody::Movie(movie_view(movie)),
                footer,
            },
            _ => DetailsViewModel {
                header: HeaderInfo {
                    title: " Movie Details ".to_string(),
                },
                body: DetailsBody::Message(StatusLine::new(
                    details
                        .movie
                        .error()
                        .filter(|message| !message.trim().is_empty())
                        .unwrap_or(DETAILS_UNKNOWN_ERROR),
                    Tone::Error,
                )),
                footer,
            },
        }
    }
}

/// Joins the non-empty parts of the movie's one-line summary.
#[must_use]
pub fn short_description(movie: &MovieDetailsEntry) -> String {
    [&movie.rated, &movie.runtime, &movie.genre, &movie.released]
        .into_iter()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" | ")
}

fn movie_view(movie: &MovieDetailsEntry) -> MovieView {
    let field = |label, value: &String| DetailField {
        label,
        value: value.clone(),
    };

    let ratings: Vec<String> = movie
        .ratings
        .iter()
        .map(|rating| format!("{} : {}", rating.source, rating.value))
        .collect();

    MovieView {
        title: movie.title.clone(),
        year: if movie.year.is_empty() {
            String::new()
        } else {
            format!("({})", movie.year)
        },
        short_description: short_description(movie),
        rating: movie.imdb_rating.map(|rating| format!("{rating:.1}/10")),
        votes: movie.imdb_votes.clone(),
        plot: movie.plot.clone(),
        fields: vec![
            field("Director", &movie.director),
            field("Writer", &movie.writer),
            field("Actors", &movie.actors),
            field("Language", &movie.language),
            field("Country", &movie.country),
            field("Awards", &movie.awards),
            field("Metascore", &movie.metascore),
            field("Type", &movie.kind),
            field("DVD", &movie.dvd),
            field("BoxOffice", &movie.box_office),
            field("Production", &movie.production),
            field("Website", &movie.website),
        ],
        ratings_message: ratings.is_empty().then(|| NO_RATINGS.to_string()),
        ratings,
    }
}

/// Character ranges of `text` matched by `pattern`, coalesced into runs.
///
/// Returns `(start, end)` pairs with exclusive end, in character indices.
#[must_use]
pub fn highlight_ranges(text: &str, pattern: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    use fuzzy_matcher::FuzzyMatcher;

    let Some((_score, indices)) = matcher.fuzzy_indices(text, pattern) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

fn clip_ranges(ranges: Vec<(usize, usize)>, len: usize) -> Vec<(usize, usize)> {
    ranges
        .into_iter()
        .filter(|&(start, _)| start < len)
        .map(|(start, end)| (start, end.min(len)))
        .collect()
}

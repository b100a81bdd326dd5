//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box
//! - [`table`]: Result list with TITLE, YEAR and TYPE columns
//! - [`history`]: Past searches
//! - [`details`]: Full movie record
//! - [`empty`]: Centered message
//!
//! # Layout Modes
//!
//! - [`render_search_screen`]: Header + `SearchBar` + Table + History + Footer
//! - [`render_details_screen`]: Header + Movie or message + Footer

mod details;
mod empty;
mod footer;
mod header;
mod history;
mod search;
mod table;

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailsBody, DetailsViewModel, SearchViewModel, Tone};

use details::render_movie;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use history::render_history;
use search::render_search_bar;
use table::{render_table_headers, render_table_message, render_table_rows};

/// Renders a horizontal border line at `row`.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Theme color for a status line.
fn status_color(tone: Tone, theme: &Theme) -> &str {
    match tone {
        Tone::Normal => &theme.colors.text_normal,
        Tone::Dim => &theme.colors.text_dim,
        Tone::Error => &theme.colors.error_fg,
    }
}

/// Renders the search screen.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Caption]
/// [Table Headers]
/// [Table Rows or message]
/// [blank]
/// [History]
/// [Border]
/// [Footer]
/// ```
///
/// Before the first search, the hint replaces caption and table.
pub fn render_search_screen(vm: &SearchViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);

    if let Some(empty) = &vm.empty_state {
        current_row = render_empty_state(current_row + 1, empty, theme, cols);
    } else {
        if let Some(caption) = &vm.caption {
            position_cursor(current_row, 1);
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{caption}");
            print!("{}", Theme::reset());
            current_row += 1;
        }
        current_row = render_table_headers(current_row, theme, cols);
        current_row = match &vm.table_message {
            Some(message) => render_table_message(current_row, message, theme, cols),
            None => render_table_rows(current_row, &vm.display_items, theme, cols),
        };
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    let history_lines = if vm.history.is_empty() { 0 } else { vm.history.len() + 1 };
    let history_row = border_row.saturating_sub(history_lines).max(current_row + 1);
    if history_row + history_lines <= border_row {
        render_history(history_row, &vm.history, theme, cols);
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the details screen.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Movie or centered message]
/// [Border]
/// [Footer]
/// ```
pub fn render_details_screen(vm: &DetailsViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    match &vm.body {
        DetailsBody::Message(message) => {
            print_centered(current_row + 2, &message.message, status_color(message.tone, theme), cols);
        }
        DetailsBody::Movie(movie) => {
            render_movie(current_row + 1, border_row, movie, theme, cols);
        }
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

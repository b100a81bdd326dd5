//! Details screen body renderer.
//!
//! ```text
//! Batman (1989)                                           7.5/10
//! PG-13 | 126 min | Action, Adventure | 23 Jun 1989       351,247
//!
//! The Dark Knight of Gotham City begins his war on crime...
//!
//! Director     Tim Burton
//! ...
//! Ratings:
//!   • Rotten Tomatoes : 71%
//! ```
//!
//! Lines that do not fit above the footer are dropped.

use crate::ui::helpers::{display_len, position_cursor, print_padded, truncate, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::MovieView;

const LABEL_WIDTH: usize = 13;
const SIDE_MARGIN: usize = 2;

/// Renders `movie` from `row` down to (excluding) `last_row`.
pub fn render_movie(row: usize, last_row: usize, movie: &MovieView, theme: &Theme, cols: usize) -> usize {
    let width = cols.saturating_sub(SIDE_MARGIN * 2).max(10);
    let mut current_row = row;
    let fits = |current_row: usize| current_row < last_row;

    if fits(current_row) {
        let title = format!("{} {}", movie.title, movie.year);
        let rating = movie.rating.clone().unwrap_or_default();
        render_split_line(current_row, &title, &rating, &theme.colors.header_fg, &theme.colors.rating_fg, width, true);
        current_row += 1;
    }
    if fits(current_row) {
        render_split_line(
            current_row,
            &movie.short_description,
            &movie.votes,
            &theme.colors.text_dim,
            &theme.colors.text_dim,
            width,
            false,
        );
        current_row += 2;
    }

    for line in wrap(&movie.plot, width) {
        if !fits(current_row) {
            return current_row;
        }
        position_cursor(current_row, SIDE_MARGIN + 1);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{line}");
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row += 1;

    let value_width = width.saturating_sub(LABEL_WIDTH);
    for field in &movie.fields {
        if !fits(current_row) {
            return current_row;
        }
        position_cursor(current_row, SIDE_MARGIN + 1);
        print!("{}", Theme::fg(&theme.colors.label_fg));
        print_padded(field.label, LABEL_WIDTH);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", truncate(&field.value, value_width));
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row += 1;

    if let Some(message) = &movie.ratings_message {
        if fits(current_row) {
            position_cursor(current_row, SIDE_MARGIN + 1);
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{}", truncate(message, width));
            print!("{}", Theme::reset());
            current_row += 1;
        }
        return current_row;
    }

    if fits(current_row) {
        position_cursor(current_row, SIDE_MARGIN + 1);
        print!("{}Ratings:{}", Theme::fg(&theme.colors.label_fg), Theme::reset());
        current_row += 1;
    }
    for rating in &movie.ratings {
        if !fits(current_row) {
            break;
        }
        position_cursor(current_row, SIDE_MARGIN + 1);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", truncate(&format!("  • {rating}"), width));
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row
}

/// Prints `left` at the margin and `right` flush right on the same line.
fn render_split_line(
    row: usize,
    left: &str,
    right: &str,
    left_color: &str,
    right_color: &str,
    width: usize,
    bold: bool,
) {
    let right_len = display_len(right);
    let left = truncate(left, width.saturating_sub(right_len + 1));

    position_cursor(row, SIDE_MARGIN + 1);
    if bold {
        print!("{}", Theme::bold());
    }
    print!("{}", Theme::fg(left_color));
    print_padded(&left, width.saturating_sub(right_len));
    print!("{}", Theme::fg(right_color));
    print!("{right}");
    print!("{}", Theme::reset());
}

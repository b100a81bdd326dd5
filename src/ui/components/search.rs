//! Search bar component renderer.

use crate::ui::helpers::{display_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the 3-line search box at `row`.
///
/// ```text
/// [margin] ┌──────────────────────┐ [margin]
/// [margin] │ Search: batman█      │ [margin]
/// [margin] └──────────────────────┘ [margin]
/// ```
///
/// The border uses `search_bar_invalid` after a too-short submission and
/// `search_bar_border` otherwise. A block cursor is drawn while the box has
/// focus, and `[searching]` is appended while a request is in flight.
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border_color = if search.is_valid {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.search_bar_invalid
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let cursor = if search.is_focused { "█" } else { "" };
    let status = if search.is_loading { "  [searching]" } else { "" };
    let placeholder = search.query.is_empty() && !search.is_focused;
    let query = if placeholder {
        "Search for movies..".to_string()
    } else {
        search.query.clone()
    };
    let search_text = truncate(&format!(" Search: {query}{cursor}{status}"), inner_width);
    let padding = inner_width.saturating_sub(display_len(&search_text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("│");
    if placeholder {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    if !search.is_valid {
        let warning = truncate("Minimum 5 characters required", inner_width);
        position_cursor(row + 2, SEARCH_BOX_MARGIN + 3);
        print!("{}", Theme::fg(&theme.colors.search_bar_invalid));
        print!(" {warning} ");
        print!("{}", Theme::reset());
    }

    row + 3
}

//! Search history component renderer.

use crate::ui::helpers::{position_cursor, print_padded, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HistoryItem;

/// Renders the history heading and one line per past search at `row`.
///
/// Renders nothing when the history is empty.
pub fn render_history(row: usize, items: &[HistoryItem], theme: &Theme, cols: usize) -> usize {
    if items.is_empty() {
        return row;
    }

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("Your search history:");
    print!("{}", Theme::reset());

    let mut current_row = row + 1;
    for item in items {
        position_cursor(current_row, 1);
        if item.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        let line = truncate(&format!("  • {}", item.search_term), cols);
        print_padded(&line, cols);
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row
}

//! Result table component renderer.
//!
//! Three columns: TITLE (remaining width), YEAR and TYPE (fixed). Rows support
//! selection and fuzzy match highlighting.

use crate::app::state::{TYPE_COLUMN_WIDTH, YEAR_COLUMN_WIDTH};
use crate::ui::helpers::{self, display_len, position_cursor, print_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, StatusLine};

use super::status_color;

fn title_width(cols: usize) -> usize {
    cols.saturating_sub(YEAR_COLUMN_WIDTH + TYPE_COLUMN_WIDTH + 2).max(8)
}

/// Renders the column headers at `row`.
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print_padded("TITLE", title_width(cols) + 1);
    print_padded("YEAR", YEAR_COLUMN_WIDTH);
    print!("TYPE");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all rows starting at `row`.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a loading or error line in place of rows.
pub fn render_table_message(row: usize, message: &StatusLine, theme: &Theme, cols: usize) -> usize {
    helpers::print_centered(row, &message.message, status_color(message.tone, theme), cols);
    row + 1
}

/// Renders one result row, padded to the full width so the selection
/// background covers it.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);
    print!(
        "{}",
        " ".repeat((title_width(cols) + 1).saturating_sub(display_len(&item.title)))
    );

    print_padded(&item.year, YEAR_COLUMN_WIDTH);
    print!("{}", item.kind);

    let line_len = title_width(cols) + 1 + YEAR_COLUMN_WIDTH + display_len(&item.kind);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

//! Empty state component renderer.

use crate::ui::helpers::print_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message starting at `row`.
///
/// The message uses `empty_state_fg`; the subtitle is dimmed.
///
/// ```text
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    print_centered(row, &empty.message, &theme.colors.empty_state_fg, cols);
    print!("{}", Theme::dim());
    print_centered(row + 1, &empty.subtitle, &theme.colors.text_dim, cols);
    row + 2
}

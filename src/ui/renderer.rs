//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the view model from `AppState`, then hand
//! it to the component renderer for the current screen.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with `print!`. Does not clear the screen; Zellij
/// clears the pane before each render call.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    match vm {
        UIViewModel::Search(search) => components::render_search_screen(search, theme, cols, rows),
        UIViewModel::Details(details) => components::render_details_screen(details, theme, cols, rows),
    }
}

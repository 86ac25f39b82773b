//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components. It dispatches on the
//! active screen and ensures proper layout filling.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ScreenBody, UIViewModel};

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state and delegates to the
/// renderer for whichever screen is active.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
///
/// # Output
///
/// Prints ANSI-styled output to stdout using `print!` macros. Does not clear
/// the screen or manage cursor position.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a view model with screen-specific layout.
///
/// # Parameters
///
/// * `vm` - Pre-computed view model
/// * `theme` - Active color theme
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    match &vm.body {
        ScreenBody::Home {
            ingredients,
            card,
            notice,
        } => {
            components::render_home_screen(
                vm,
                ingredients,
                card,
                notice.as_deref(),
                theme,
                cols,
                rows,
            );
        }
        ScreenBody::Liked { items, hidden_count } => {
            components::render_liked_screen(vm, items, *hidden_count, theme, cols, rows);
        }
    }
}

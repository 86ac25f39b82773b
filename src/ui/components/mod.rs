//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with branding
//! - [`footer`]: Help text and keybinding hints
//! - [`ingredients`]: Fixed six-ingredient picker bar
//! - [`card`]: Bordered card for the dish under review
//! - [`status`]: Centered status message (loading, empty, error, done)
//! - [`liked_list`]: Liked meals table with NAME and THUMBNAIL columns
//!
//! # Layout Modes
//!
//! The module provides two high-level layout functions:
//!
//! - [`render_home_screen`]: Header + Picker + Card/Status + Notice + Footer
//! - [`render_liked_screen`]: Header + Liked table + Footer

mod card;
mod footer;
mod header;
mod ingredients;
mod liked_list;
mod status;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardBody, IngredientEntry, LikedItem, UIViewModel};

use card::render_card;
use footer::render_footer;
use header::render_header;
use ingredients::render_ingredient_bar;
use liked_list::{render_liked_headers, render_liked_rows};
use status::render_status;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/body, body/footer).
///
/// # Parameters
///
/// * `row` - Row position to render the border (1-indexed)
/// * `color` - Hex color for the border
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the home screen layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Ingredient picker]
/// [blank line]
/// [Card or Status]
/// [Notice line]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
///
/// # Parameters
///
/// * `vm` - View model (header/footer)
/// * `ingredients` - Picker entries in key order
/// * `card` - Dish card or status message for the card area
/// * `notice` - Transient one-line notice ("Liked!")
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `rows` - Terminal height in rows
pub fn render_home_screen(
    vm: &UIViewModel,
    ingredients: &[IngredientEntry],
    card: &CardBody,
    notice: Option<&str>,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_ingredient_bar(current_row, ingredients, theme, cols);
    current_row += 1; // blank line between picker and card

    current_row = match card {
        CardBody::Dish(info) => render_card(current_row, info, theme, cols),
        CardBody::Status(info) => render_status(current_row + 1, info, theme, cols),
    };

    if let Some(notice) = notice {
        render_notice(current_row, notice, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the liked screen layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Liked table headers]
/// [Liked rows]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
///
/// # Parameters
///
/// * `vm` - View model (header/footer)
/// * `items` - Visible liked items, in like order
/// * `hidden_count` - Liked entries that did not fit in the pane
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `rows` - Terminal height in rows
pub fn render_liked_screen(
    vm: &UIViewModel,
    items: &[LikedItem],
    hidden_count: usize,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_liked_headers(current_row, theme);
    let _current_row = render_liked_rows(current_row, items, hidden_count, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the transient notice line, centered.
fn render_notice(row: usize, notice: &str, theme: &Theme, cols: usize) {
    let len = notice.chars().count();
    let padding = (cols.saturating_sub(len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.notice_fg));
    print!("{}", " ".repeat(padding));
    print!("{notice}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}

//! Liked meals list component renderer.
//!
//! This module renders the liked-meals screen as a two-column table with NAME
//! and THUMBNAIL columns, in like order.

use crate::ui::helpers::{position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::LikedItem;

/// Fixed width of the NAME column.
const NAME_COLUMN_WIDTH: usize = 37;

/// Renders the liked list column headers at the specified row.
///
/// Displays "NAME" and "THUMBNAIL" column headers with bold styling and theme
/// colors.
///
/// # Parameters
///
/// * `row` - Row position to render the headers (1-indexed)
/// * `theme` - Active color theme
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_liked_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{:<NAME_COLUMN_WIDTH$} {:<}", "NAME", "THUMBNAIL");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all liked rows starting at the specified row.
///
/// Iterates through liked items and renders each as a table row. If entries
/// were hidden for lack of space, a trailing dimmed "… and N more" line is
/// appended.
///
/// # Parameters
///
/// * `row` - Starting row position for the list (1-indexed)
/// * `items` - Visible liked items, in like order
/// * `hidden_count` - Liked entries that did not fit in the pane
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position
pub fn render_liked_rows(
    row: usize,
    items: &[LikedItem],
    hidden_count: usize,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_liked_row(current_row, item, theme, cols);
    }

    if hidden_count > 0 {
        position_cursor(current_row, 1);
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("… and {hidden_count} more");
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}

/// Renders a single liked row at the specified row position.
///
/// # Layout
///
/// ```text
/// NAME (up to 36 chars) [space] THUMBNAIL (variable) [padding to fill line]
/// ```
fn render_liked_row(row: usize, item: &LikedItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let name = truncate_to_width(&item.name, NAME_COLUMN_WIDTH - 1);
    let name_len = name.chars().count();

    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{name}");
    print!("{}", " ".repeat(NAME_COLUMN_WIDTH.saturating_sub(name_len)));

    let thumb_width = cols.saturating_sub(NAME_COLUMN_WIDTH + 1);
    let thumb = truncate_to_width(&item.thumb, thumb_width);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(" {thumb}");

    let line_len = NAME_COLUMN_WIDTH + 1 + thumb.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

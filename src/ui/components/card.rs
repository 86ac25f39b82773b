//! Dish card component renderer.
//!
//! This module renders the meal under review as a bordered card containing the
//! dish name, thumbnail link, and position counter.

use crate::ui::helpers::{position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardInfo;

/// Horizontal margin for the card box (spaces on left and right).
const CARD_MARGIN: usize = 3;

/// Renders the dish card at the specified row.
///
/// Displays a 5-line bordered box with the dish name, thumbnail URL, and the
/// position counter. The box is horizontally centered with margins on both
/// sides.
///
/// # Parameters
///
/// * `row` - Starting row position for the card (1-indexed)
/// * `card` - Card information (name, thumbnail, position)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 5)
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────────┐ [margin]
/// [margin] │ Brown Stew Chicken   │ [margin]
/// [margin] │ https://...jpg       │ [margin]
/// [margin] │ 3 of 14              │ [margin]
/// [margin] └──────────────────────┘ [margin]
/// ```
///
/// The box width is calculated as `cols - (2 * CARD_MARGIN)`. The inner
/// content width is `box_width - 2` (accounting for left and right borders).
/// Content lines longer than the inner width are truncated with an ellipsis.
pub fn render_card(row: usize, card: &CardInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(CARD_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(CARD_MARGIN));
    print!("{}", Theme::fg(&theme.colors.card_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let name = truncate_to_width(&format!(" {}", card.name), inner_width);
    render_content_line(
        row + 1,
        &name,
        &theme.colors.card_title,
        true,
        theme,
        inner_width,
    );

    let thumb = truncate_to_width(&format!(" {}", card.thumb), inner_width);
    render_content_line(
        row + 2,
        &thumb,
        &theme.colors.text_dim,
        false,
        theme,
        inner_width,
    );

    let position = truncate_to_width(&format!(" {}", card.position), inner_width);
    render_content_line(
        row + 3,
        &position,
        &theme.colors.accent,
        false,
        theme,
        inner_width,
    );

    position_cursor(row + 4, 1);
    print!("{}", " ".repeat(CARD_MARGIN));
    print!("{}", Theme::fg(&theme.colors.card_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 5
}

/// Renders one bordered content line of the card.
fn render_content_line(
    row: usize,
    text: &str,
    color: &str,
    bold: bool,
    theme: &Theme,
    inner_width: usize,
) {
    let padding = inner_width.saturating_sub(text.chars().count());

    position_cursor(row, 1);
    print!("{}", " ".repeat(CARD_MARGIN));
    print!("{}", Theme::fg(&theme.colors.card_border));
    print!("│");
    if bold {
        print!("{}", Theme::bold());
    }
    print!("{}", Theme::fg(color));
    print!("{text}");
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.card_border));
    print!("│");
    print!("{}", Theme::reset());
}

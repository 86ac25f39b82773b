//! Status message component renderer.
//!
//! This module renders the status message shown in place of the dish card
//! while loading, after an empty result, after a connection failure, or once
//! every meal in the category has been reviewed.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusInfo;

/// Renders the status message starting at the specified row.
///
/// Displays a centered two-line message. The primary line uses the info or
/// error status color depending on `is_error`; the subtitle uses dimmed text.
///
/// # Parameters
///
/// * `row` - Row position for the primary message (1-indexed)
/// * `status` - Status information (message, subtitle, error flag)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 2)
///
/// # Layout
///
/// ```text
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
pub fn render_status(row: usize, status: &StatusInfo, theme: &Theme, cols: usize) -> usize {
    let color = if status.is_error {
        &theme.colors.status_error_fg
    } else {
        &theme.colors.status_info_fg
    };

    let msg_len = status.message.chars().count();
    let msg_padding = (cols.saturating_sub(msg_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", status.message);
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let sub_len = status.subtitle.chars().count();
    let sub_padding = (cols.saturating_sub(sub_len)) / 2;

    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{}", status.subtitle);
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());

    row + 2
}

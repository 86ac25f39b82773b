//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components: cursor positioning and width-aware text truncation.

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
///
/// # Parameters
///
/// * `row` - Target row (1-indexed)
/// * `col` - Target column (1-indexed, typically 1 for start of line)
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates text to fit a column, appending an ellipsis when shortened.
///
/// Operates on character counts, not bytes, so multi-byte names truncate
/// cleanly. Widths below 2 return an empty string rather than a bare ellipsis.
///
/// # Parameters
///
/// * `text` - The text to fit
/// * `max_width` - Maximum number of characters in the result
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_width {
        return text.to_string();
    }
    if max_width < 2 {
        return String::new();
    }

    let kept: String = text.chars().take(max_width - 1).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("Stew", 10), "Stew");
        assert_eq!(truncate_to_width("Stew", 4), "Stew");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(truncate_to_width("Brown Stew Chicken", 10), "Brown Ste…");
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        assert_eq!(truncate_to_width("Bœuf Bourguignon", 6), "Bœuf …");
    }

    #[test]
    fn tiny_widths_return_empty() {
        assert_eq!(truncate_to_width("Stew", 1), "");
        assert_eq!(truncate_to_width("Stew", 0), "");
    }
}

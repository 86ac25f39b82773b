//! Ingredient picker component renderer.
//!
//! This module renders the fixed six-ingredient picker as a single row of
//! `key:label` entries, highlighting the most recent selection.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::IngredientEntry;

/// Renders the ingredient picker bar at the specified row.
///
/// Displays each ingredient as `key:label` separated by two spaces. The most
/// recently selected ingredient is drawn bold in the accent color; the rest
/// use the normal text color.
///
/// # Parameters
///
/// * `row` - Row position to render the bar (1-indexed)
/// * `ingredients` - Picker entries in key order
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Layout
///
/// ```text
///  1:Chicken  2:Beef  3:Pork  4:Potato  5:Cheese  6:Salmon
/// ```
pub fn render_ingredient_bar(
    row: usize,
    ingredients: &[IngredientEntry],
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, 1);
    print!(" ");

    let mut printed = 1;
    for entry in ingredients {
        let text = format!("{}:{}", entry.key, entry.label);
        if printed + text.len() + 2 > cols {
            break;
        }

        if entry.is_selected {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.accent));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{text}");
        print!("{}", Theme::reset());
        print!("  ");
        printed += text.len() + 2;
    }

    print!("{}", " ".repeat(cols.saturating_sub(printed)));
    row + 1
}

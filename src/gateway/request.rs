//! Filter endpoint URL construction.

use crate::domain::Ingredient;

/// Default TheMealDB API base, version 1 public key.
pub const DEFAULT_API_BASE: &str = "https://www.themealdb.com/api/json/v1/1/";

/// Builds the filter endpoint URL for an ingredient.
///
/// Produces `{base}filter.php?i={ingredient}`. A missing trailing slash on the
/// base is tolerated. The ingredient value needs no percent-encoding: the six
/// picker values are plain ASCII words.
///
/// # Examples
///
/// ```
/// use mealdeck::domain::Ingredient;
/// use mealdeck::gateway::{filter_url, DEFAULT_API_BASE};
///
/// let url = filter_url(DEFAULT_API_BASE, Ingredient::Chicken);
/// assert_eq!(
///     url,
///     "https://www.themealdb.com/api/json/v1/1/filter.php?i=Chicken"
/// );
/// ```
#[must_use]
pub fn filter_url(base: &str, ingredient: Ingredient) -> String {
    let base = base.trim_end_matches('/');
    format!("{base}/filter.php?i={}", ingredient.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_filter_url_for_each_ingredient() {
        for ingredient in Ingredient::ALL {
            let url = filter_url(DEFAULT_API_BASE, ingredient);
            assert_eq!(
                url,
                format!(
                    "https://www.themealdb.com/api/json/v1/1/filter.php?i={}",
                    ingredient.as_str()
                )
            );
        }
    }

    #[test]
    fn tolerates_base_without_trailing_slash() {
        let url = filter_url("https://api.example.com/v1", Ingredient::Salmon);
        assert_eq!(url, "https://api.example.com/v1/filter.php?i=Salmon");
    }
}

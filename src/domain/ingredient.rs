//! The closed set of filter ingredients offered by the UI.
//!
//! TheMealDB accepts arbitrary ingredient names, but the plugin deliberately offers
//! a fixed six-entry picker. The enum keeps that set closed at the type level: the
//! handler and gateway can only ever be asked to fetch one of these values.

use serde::{Deserialize, Serialize};

/// One of the six fixed ingredient filters.
///
/// The `as_str` form is sent verbatim as the `i` query parameter of the filter
/// endpoint; the API expects the English names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ingredient {
    Chicken,
    Beef,
    Pork,
    Potato,
    Cheese,
    Salmon,
}

impl Ingredient {
    /// All ingredients in picker order.
    ///
    /// The order is fixed and matches the number keys (1-6) shown in the UI.
    pub const ALL: [Self; 6] = [
        Self::Chicken,
        Self::Beef,
        Self::Pork,
        Self::Potato,
        Self::Cheese,
        Self::Salmon,
    ];

    /// Returns the API query value for this ingredient.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chicken => "Chicken",
            Self::Beef => "Beef",
            Self::Pork => "Pork",
            Self::Potato => "Potato",
            Self::Cheese => "Cheese",
            Self::Salmon => "Salmon",
        }
    }

    /// Looks up an ingredient by its zero-based picker position.
    ///
    /// Returns `None` for positions outside the six-entry picker.
    ///
    /// # Examples
    ///
    /// ```
    /// use mealdeck::domain::Ingredient;
    ///
    /// assert_eq!(Ingredient::from_index(0), Some(Ingredient::Chicken));
    /// assert_eq!(Ingredient::from_index(5), Some(Ingredient::Salmon));
    /// assert_eq!(Ingredient::from_index(6), None);
    /// ```
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Ingredient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picker_offers_exactly_six_ingredients() {
        assert_eq!(Ingredient::ALL.len(), 6);
    }

    #[test]
    fn query_values_match_api_names() {
        let names: Vec<&str> = Ingredient::ALL.iter().map(|i| i.as_str()).collect();
        assert_eq!(
            names,
            vec!["Chicken", "Beef", "Pork", "Potato", "Cheese", "Salmon"]
        );
    }

    #[test]
    fn from_index_covers_picker_range_only() {
        for (idx, ingredient) in Ingredient::ALL.iter().enumerate() {
            assert_eq!(Ingredient::from_index(idx), Some(*ingredient));
        }
        assert_eq!(Ingredient::from_index(6), None);
        assert_eq!(Ingredient::from_index(usize::MAX), None);
    }
}

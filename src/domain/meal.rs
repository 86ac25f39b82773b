//! Meal domain model.
//!
//! This module defines the core `Meal` type representing a single recipe record
//! returned by TheMealDB filter endpoint. Meals are immutable value types: once
//! received from the API they are never mutated, only moved or cloned between the
//! review queue and the liked collection.

use serde::{Deserialize, Serialize};

/// A recipe record returned by TheMealDB.
///
/// Carries only the three fields the filter endpoint provides: the API's meal
/// identifier, the display name, and the thumbnail image URL. Everything else the
/// API may send is ignored at deserialization time.
///
/// # Fields
///
/// - `id`: Identifier assigned by TheMealDB, unique per meal
/// - `name`: Human-readable dish name
/// - `thumb`: URL of the thumbnail image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub thumb: String,
}

impl Meal {
    /// Creates a meal from its three API fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use mealdeck::domain::Meal;
    ///
    /// let meal = Meal::new("52940", "Brown Stew Chicken", "https://example.com/t.jpg");
    /// assert_eq!(meal.name, "Brown Stew Chicken");
    /// ```
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        thumb: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            thumb: thumb.into(),
        }
    }
}

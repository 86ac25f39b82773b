//! Response body classification.
//!
//! TheMealDB's filter endpoint answers with a single JSON object whose `meals`
//! field is either `null` (nothing found) or an array of meal objects. This
//! module deserializes that shape and collapses the status/body pair into the
//! three-way [`FetchOutcome`].

use crate::domain::Meal;
use serde::Deserialize;

/// Wire shape of the filter endpoint response.
///
/// Only the three fields the plugin uses are declared; serde ignores the rest
/// of each meal object.
#[derive(Debug, Deserialize)]
struct FilterResponse {
    meals: Option<Vec<MealRecord>>,
}

#[derive(Debug, Deserialize)]
struct MealRecord {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb")]
    thumb: String,
}

impl From<MealRecord> for Meal {
    fn from(record: MealRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            thumb: record.thumb,
        }
    }
}

/// Result of one meal fetch, as seen by the event handler.
///
/// The three variants map one-to-one onto the three user-visible outcomes of an
/// ingredient selection: a populated review queue, a "no dishes" message, or a
/// "connection error" message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The API returned at least one meal, in response order.
    Meals(Vec<Meal>),

    /// The API answered successfully but found nothing for the ingredient.
    Empty,

    /// Transport failure, non-2xx status, or unparseable body.
    ///
    /// The cause string is opaque; it is logged but never shown to the user.
    Failed(String),
}

/// Classifies a raw HTTP result into a [`FetchOutcome`].
///
/// # Classification rules
///
/// 1. Non-2xx status → `Failed` (the body is not inspected)
/// 2. Body is not valid UTF-8 or not the expected JSON shape → `Failed`
/// 3. `meals` is `null` or an empty array → `Empty`
/// 4. Otherwise → `Meals`, preserving response order exactly (no sort, filter,
///    or dedup on the client side)
///
/// # Examples
///
/// ```
/// use mealdeck::gateway::{classify_response, FetchOutcome};
///
/// let body = br#"{"meals":null}"#;
/// assert_eq!(classify_response(200, body), FetchOutcome::Empty);
/// ```
#[must_use]
pub fn classify_response(status: u16, body: &[u8]) -> FetchOutcome {
    if !(200..300).contains(&status) {
        tracing::debug!(status = status, "fetch failed with non-success status");
        return FetchOutcome::Failed(format!("http status {status}"));
    }

    let parsed: FilterResponse = match serde_json::from_slice(body) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::debug!(error = %e, "fetch body failed to parse");
            return FetchOutcome::Failed(format!("invalid response body: {e}"));
        }
    };

    match parsed.meals {
        None => FetchOutcome::Empty,
        Some(records) if records.is_empty() => FetchOutcome::Empty,
        Some(records) => {
            tracing::debug!(meal_count = records.len(), "fetch returned meals");
            FetchOutcome::Meals(records.into_iter().map(Meal::from).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_MEALS: &[u8] = br#"{
        "meals": [
            {"strMeal": "Beef and Mustard Pie", "strMealThumb": "https://example.com/a.jpg", "idMeal": "52874"},
            {"strMeal": "Beef and Oyster pie", "strMealThumb": "https://example.com/b.jpg", "idMeal": "52878"}
        ]
    }"#;

    #[test]
    fn parses_meals_in_response_order() {
        let outcome = classify_response(200, TWO_MEALS);
        let FetchOutcome::Meals(meals) = outcome else {
            panic!("expected meals");
        };
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[0].id, "52874");
        assert_eq!(meals[0].name, "Beef and Mustard Pie");
        assert_eq!(meals[0].thumb, "https://example.com/a.jpg");
        assert_eq!(meals[1].id, "52878");
    }

    #[test]
    fn ignores_extra_fields_on_meal_objects() {
        let body = br#"{"meals":[{"idMeal":"1","strMeal":"X","strMealThumb":"u","strCategory":"Beef"}]}"#;
        let FetchOutcome::Meals(meals) = classify_response(200, body) else {
            panic!("expected meals");
        };
        assert_eq!(meals[0].name, "X");
    }

    #[test]
    fn null_meals_is_empty_not_failure() {
        assert_eq!(classify_response(200, br#"{"meals":null}"#), FetchOutcome::Empty);
    }

    #[test]
    fn empty_array_is_empty_not_failure() {
        assert_eq!(classify_response(200, br#"{"meals":[]}"#), FetchOutcome::Empty);
    }

    #[test]
    fn non_success_status_is_failure() {
        assert!(matches!(
            classify_response(500, TWO_MEALS),
            FetchOutcome::Failed(_)
        ));
        assert!(matches!(
            classify_response(404, br#"{"meals":null}"#),
            FetchOutcome::Failed(_)
        ));
    }

    #[test]
    fn unparseable_body_is_failure() {
        assert!(matches!(
            classify_response(200, b"<html>gateway timeout</html>"),
            FetchOutcome::Failed(_)
        ));
    }
}

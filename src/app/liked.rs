//! The liked collection: every meal the user has liked, in like order.
//!
//! Append-only within a session. No deduplication: a meal liked twice across
//! two fetches appears twice, matching what the user actually did. The
//! collection is hydrated once at startup from storage (see the worker layer)
//! and grows via [`LikedCollection::like`] afterwards.

use crate::domain::Meal;

/// Ordered, append-only list of liked meals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikedCollection {
    meals: Vec<Meal>,
}

impl LikedCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a meal unconditionally.
    pub fn like(&mut self, meal: Meal) {
        tracing::debug!(meal_id = %meal.id, meal_name = %meal.name, "meal liked");
        self.meals.push(meal);
    }

    /// All liked meals in like order, for rendering.
    #[must_use]
    pub fn all(&self) -> &[Meal] {
        &self.meals
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Replaces the collection with meals loaded from storage.
    ///
    /// Called exactly once, when the worker delivers the persisted state at
    /// startup. Stored order is preserved.
    pub fn hydrate(&mut self, meals: Vec<Meal>) {
        tracing::debug!(meal_count = meals.len(), "liked collection hydrated from storage");
        self.meals = meals;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(id: &str) -> Meal {
        Meal::new(id, format!("Meal {id}"), format!("https://example.com/{id}.jpg"))
    }

    #[test]
    fn starts_empty() {
        let liked = LikedCollection::new();
        assert!(liked.is_empty());
        assert_eq!(liked.all(), &[]);
    }

    #[test]
    fn appends_in_like_order() {
        let mut liked = LikedCollection::new();
        liked.like(meal("2"));
        liked.like(meal("1"));
        let ids: Vec<&str> = liked.all().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut liked = LikedCollection::new();
        liked.like(meal("1"));
        liked.like(meal("1"));
        assert_eq!(liked.len(), 2);
    }

    #[test]
    fn hydrate_replaces_contents() {
        let mut liked = LikedCollection::new();
        liked.hydrate(vec![meal("7"), meal("8")]);
        assert_eq!(liked.len(), 2);

        liked.like(meal("9"));
        let ids: Vec<&str> = liked.all().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["7", "8", "9"]);
    }
}

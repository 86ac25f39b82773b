//! The review queue: the sequence of fetched meals under review.
//!
//! Holds the meals returned by the most recent successful fetch and a cursor
//! marking the one currently shown. The cursor only ever moves forward; the
//! queue is replaced wholesale when a new fetch succeeds.
//!
//! # State machine
//!
//! - After `reset` with a non-empty list: the first meal is current.
//! - `advance` moves the cursor forward unconditionally. Advancing past the end
//!   is valid and simply leaves the queue exhausted.
//! - `current()` returns `None` once the cursor has passed the last meal (or
//!   the queue was reset with an empty list). Exhaustion is terminal until the
//!   next reset.

use crate::domain::Meal;

/// Ordered meal sequence with a forward-only cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewQueue {
    meals: Vec<Meal>,
    cursor: usize,
}

impl ReviewQueue {
    /// Creates an empty queue. `current()` is `None` until the first reset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the held sequence and moves the cursor back to the start.
    ///
    /// Insertion order is the API response order; it is preserved as-is.
    /// Resetting with an empty list leaves the queue immediately exhausted.
    pub fn reset(&mut self, meals: Vec<Meal>) {
        tracing::debug!(meal_count = meals.len(), "review queue reset");
        self.meals = meals;
        self.cursor = 0;
    }

    /// Returns the meal under review, or `None` when the queue is exhausted.
    #[must_use]
    pub fn current(&self) -> Option<&Meal> {
        self.meals.get(self.cursor)
    }

    /// Moves the cursor past the current meal.
    ///
    /// Unconditional: callers check `current()` afterwards. Advancing an
    /// already-exhausted queue is a no-op in effect (still exhausted).
    pub fn advance(&mut self) {
        self.cursor = self.cursor.saturating_add(1);
    }

    /// True once every meal has been reviewed (or the queue is empty).
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.meals.len()
    }

    /// Number of meals in the current sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    /// True if no fetch has populated the queue (or the last reset was empty).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// One-based position of the meal under review, for "n of m" display.
    ///
    /// `None` when exhausted.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        if self.is_exhausted() {
            None
        } else {
            Some(self.cursor + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Meal;

    fn meal(id: &str) -> Meal {
        Meal::new(id, format!("Meal {id}"), format!("https://example.com/{id}.jpg"))
    }

    #[test]
    fn fresh_queue_is_exhausted() {
        let queue = ReviewQueue::new();
        assert!(queue.current().is_none());
        assert!(queue.is_exhausted());
    }

    #[test]
    fn reset_with_empty_list_is_immediately_exhausted() {
        let mut queue = ReviewQueue::new();
        queue.reset(vec![]);
        assert!(queue.current().is_none());
        assert!(queue.is_exhausted());
        assert_eq!(queue.position(), None);
    }

    #[test]
    fn reset_starts_at_first_meal() {
        let mut queue = ReviewQueue::new();
        queue.reset(vec![meal("1"), meal("2")]);
        assert_eq!(queue.current().map(|m| m.id.as_str()), Some("1"));
        assert_eq!(queue.position(), Some(1));
        assert!(!queue.is_exhausted());
    }

    #[test]
    fn advancing_through_two_meals_exhausts_after_two_steps() {
        let mut queue = ReviewQueue::new();
        queue.reset(vec![meal("1"), meal("2")]);

        queue.advance();
        assert_eq!(queue.current().map(|m| m.id.as_str()), Some("2"));
        assert_eq!(queue.position(), Some(2));

        queue.advance();
        assert!(queue.current().is_none());
        assert!(queue.is_exhausted());

        // A further advance stays exhausted, without error or wraparound.
        queue.advance();
        assert!(queue.current().is_none());
        assert!(queue.is_exhausted());
    }

    #[test]
    fn reset_after_exhaustion_starts_over() {
        let mut queue = ReviewQueue::new();
        queue.reset(vec![meal("1")]);
        queue.advance();
        assert!(queue.is_exhausted());

        queue.reset(vec![meal("3"), meal("4")]);
        assert_eq!(queue.current().map(|m| m.id.as_str()), Some("3"));
        assert!(!queue.is_exhausted());
    }

    #[test]
    fn preserves_response_order() {
        let mut queue = ReviewQueue::new();
        queue.reset(vec![meal("b"), meal("a"), meal("c")]);
        let mut seen = vec![];
        while let Some(m) = queue.current() {
            seen.push(m.id.clone());
            queue.advance();
        }
        assert_eq!(seen, vec!["b", "a", "c"]);
    }
}

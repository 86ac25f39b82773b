//! Serializable records persisted to the state file.
//!
//! These are the on-disk shapes. The app layer works with domain types
//! ([`Meal`](crate::domain::Meal), flags on `AppState`); the worker converts
//! between the two at the storage boundary.

use serde::{Deserialize, Serialize};

/// One liked meal as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LikedRecord {
    /// TheMealDB meal id.
    pub meal_id: String,

    /// Display name.
    pub name: String,

    /// Thumbnail URL.
    pub thumb: String,

    /// Unix timestamp (seconds) of when the meal was liked.
    pub liked_at: i64,
}

impl LikedRecord {
    /// Builds a record from a domain meal, stamped with the current time.
    #[must_use]
    pub fn from_meal(meal: &crate::domain::Meal) -> Self {
        Self {
            meal_id: meal.id.clone(),
            name: meal.name.clone(),
            thumb: meal.thumb.clone(),
            liked_at: chrono::Utc::now().timestamp(),
        }
    }
}

impl From<&LikedRecord> for crate::domain::Meal {
    fn from(record: &LikedRecord) -> Self {
        Self::new(&record.meal_id, &record.name, &record.thumb)
    }
}

/// User settings section of the state file.
///
/// Every field is `serde(default)` so settings written by an older version
/// (or a hand-edited file missing keys) still load.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingsRecord {
    /// Dark theme enabled. Defaults to `false` (light).
    #[serde(default)]
    pub dark_mode: bool,
}

/// Everything the app layer needs from storage at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredState {
    /// Persisted dark-mode flag.
    pub dark_mode: bool,

    /// Liked meals in like order.
    pub liked: Vec<LikedRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Meal;

    #[test]
    fn liked_record_captures_meal_fields() {
        let meal = Meal::new("52940", "Brown Stew Chicken", "https://example.com/t.jpg");
        let record = LikedRecord::from_meal(&meal);
        assert_eq!(record.meal_id, "52940");
        assert_eq!(record.name, "Brown Stew Chicken");
        assert_eq!(record.thumb, "https://example.com/t.jpg");
        assert!(record.liked_at > 0);
    }

    #[test]
    fn settings_missing_dark_mode_defaults_to_light() {
        let settings: SettingsRecord = serde_json::from_str("{}").unwrap();
        assert!(!settings.dark_mode);
    }

    #[test]
    fn record_converts_back_to_meal() {
        let record = LikedRecord {
            meal_id: "1".to_string(),
            name: "Stew".to_string(),
            thumb: "u".to_string(),
            liked_at: 1_700_000_000,
        };
        let meal = Meal::from(&record);
        assert_eq!(meal, Meal::new("1", "Stew", "u"));
    }
}

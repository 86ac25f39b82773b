//! Domain layer for the Mealdeck plugin.
//!
//! This module contains the core domain types for the plugin, independent of
//! Zellij-specific APIs or infrastructure concerns. It keeps the recipe model
//! and error taxonomy isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`ingredient`]: The closed set of six filter ingredients
//! - [`meal`]: Meal record model
//!
//! # Examples
//!
//! ```
//! use mealdeck::domain::{Ingredient, Meal};
//!
//! let meal = Meal::new("52940", "Brown Stew Chicken", "https://example.com/t.jpg");
//! let ingredient = Ingredient::Chicken;
//! assert_eq!(ingredient.as_str(), "Chicken");
//! ```

pub mod error;
pub mod ingredient;
pub mod meal;

pub use error::{MealdeckError, Result};
pub use ingredient::Ingredient;
pub use meal::Meal;

//! Error types for the Mealdeck plugin.
//!
//! This module defines the centralized error type [`MealdeckError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Meal-fetch failures are NOT represented here: the gateway reports them as
//! [`FetchOutcome`](crate::gateway::FetchOutcome) variants because they degrade to a
//! status message in the UI rather than propagating as errors.

use thiserror::Error;

/// The main error type for Mealdeck plugin operations.
///
/// This enum consolidates the error conditions that can occur in the plugin's
/// infrastructure layers, from storage operations to I/O failures and configuration
/// issues. Most variants wrap underlying errors from external crates using `#[from]`
/// for automatic conversion.
///
/// # Examples
///
/// ```
/// use mealdeck::domain::MealdeckError;
///
/// fn validate_config() -> Result<(), MealdeckError> {
///     Err(MealdeckError::Config("Missing required field".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum MealdeckError {
    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to the storage backend fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    ///
    /// Occurs when the plugin cannot communicate with its background worker thread,
    /// typically during storage operations. The string contains details about the
    /// communication failure.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Mealdeck operations.
///
/// This is a type alias for `std::result::Result<T, MealdeckError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, MealdeckError>;

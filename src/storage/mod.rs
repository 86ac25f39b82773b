//! Storage layer for persistent settings and liked meals.
//!
//! This module provides the storage abstraction for persisting the user's
//! theme preference and liked-meal list. It uses JSON file storage with atomic
//! writes; all IO happens on the background worker thread.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `models`: Storage record types separate from domain models

pub mod backend;
pub mod json;
pub mod models;

pub use backend::Storage;
pub use json::JsonStorage;
pub use models::{LikedRecord, SettingsRecord, StoredState};

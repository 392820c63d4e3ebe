//! Core utilities for the football players registry
//!
//! This module consolidates the pieces shared across commands:
//! - `config`: Resolution of database and media locations
//! - `logging`: tracing subscriber setup for the CLI
//! - `media`: Storage of uploaded player images

pub mod config;
pub mod logging;
pub mod media;

// Re-export commonly used items for convenience
pub use config::Settings;
pub use media::{MediaStore, StoredImage};

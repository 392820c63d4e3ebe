//! Error types for the football players registry

use thiserror::Error;


pub type Result<T> = std::result::Result<T, PlayerError>;

#[derive(Error, Debug)]
pub enum PlayerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Player name must not be empty")]
    EmptyName,

    #[error("Invalid player name: {reason}")]
    InvalidName { reason: String },

    #[error("Player name is {len} characters long, at most {max} are allowed")]
    NameTooLong { len: usize, max: usize },

    #[error("Invalid image reference '{value}': {reason}")]
    InvalidImageRef { value: String, reason: String },

    #[error("Upload '{path}' is not a valid image: {reason}")]
    InvalidImage { path: String, reason: String },

    #[error("Image file missing from media storage: {path}")]
    ImageMissing { path: String },

    #[error("Player not found: {id}")]
    PlayerNotFound { id: i64 },

    #[error("Failed to parse player ID: {0}")]
    InvalidPlayerId(#[from] std::num::ParseIntError),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

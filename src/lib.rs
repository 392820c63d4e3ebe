//! Football Players Library
//!
//! A small registry of football players, each with a name and an uploaded image.
//! Records live in SQLite, image files live in a media directory and the database
//! stores only their relative path.
//!
//! ## Features
//!
//! - **Validated Records**: Names are bounded at 200 characters, image references at 100
//! - **Media Storage**: Uploads are decoded before being stored under a collision-free name
//! - **Database Storage**: CRUD operations over a local SQLite file
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use football_players::{
//!     core::{MediaStore, Settings},
//!     storage::{NewFootballPlayer, PlayerDatabase},
//!     PlayerName,
//! };
//! use std::path::Path;
//!
//! # fn example() -> football_players::Result<()> {
//! let settings = Settings::from_env()?;
//! let mut db = PlayerDatabase::open(&settings.database_path)?;
//! let media = MediaStore::new(settings.media_root);
//!
//! let stored = media.save(Path::new("pele.png"))?;
//! let player = db.insert_player(&NewFootballPlayer {
//!     name: PlayerName::new("Pelé")?,
//!     img: stored.reference,
//! })?;
//! println!("{}", media.resolve(&player.img).display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export FOOTBALL_PLAYERS_DB=~/players.db
//! export FOOTBALL_PLAYERS_MEDIA_ROOT=~/player-images
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{
    ids::PlayerId,
    image_ref::{ImageRef, MAX_IMAGE_REF_LEN},
    name::{PlayerName, MAX_NAME_LEN},
};
pub use error::{PlayerError, Result};
pub use storage::FootballPlayer;

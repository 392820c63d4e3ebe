//! Common utilities and helper functions shared across commands.
//!
//! This module contains shared functionality that would otherwise be duplicated
//! across different command implementations.

use serde::Serialize;

use crate::{
    core::{config::Settings, media::MediaStore},
    storage::{FootballPlayer, PlayerDatabase},
    Result,
};

/// Context containing the resources every command needs
pub struct CommandContext {
    pub db: PlayerDatabase,
    pub media: MediaStore,
}

impl CommandContext {
    /// Open the database and media store described by `settings`
    pub fn new(settings: &Settings) -> Result<Self> {
        tracing::debug!(
            database = %settings.database_path.display(),
            media_root = %settings.media_root.display(),
            "Opening command context"
        );

        Ok(Self {
            db: PlayerDatabase::open(&settings.database_path)?,
            media: MediaStore::new(settings.media_root.clone()),
        })
    }

    pub fn from_parts(db: PlayerDatabase, media: MediaStore) -> Self {
        Self { db, media }
    }
}

/// One-line text rendering of a player
pub fn format_player_line(player: &FootballPlayer) -> String {
    format!("{} {} [{}]", player.id, player.name, player.img)
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?); // tarpaulin::skip
    Ok(())
}

/// Print a single player either as JSON or as a text line
pub fn print_player(player: &FootballPlayer, as_json: bool) -> Result<()> {
    if as_json {
        print_json(player)
    } else {
        println!("{}", format_player_line(player)); // tarpaulin::skip
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ImageRef, PlayerId, PlayerName};

    #[test]
    fn test_format_player_line() {
        let player = FootballPlayer {
            id: PlayerId::new(3),
            name: PlayerName::new("Zinedine Zidane").unwrap(),
            img: ImageRef::new("zidane.png").unwrap(),
            created_at: 0,
            updated_at: 0,
        };

        assert_eq!(format_player_line(&player), "3 Zinedine Zidane [zidane.png]");
    }
}

//! CLI argument definitions and parsing structures.

use super::types::ids::PlayerId;
use crate::storage::{PlayerOrder, PlayerQuery};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Location overrides shared by every command
#[derive(Debug, Args)]
pub struct GlobalOptions {
    /// Database file (or set `FOOTBALL_PLAYERS_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Directory holding uploaded images (or set `FOOTBALL_PLAYERS_MEDIA_ROOT` env var).
    #[clap(long, global = true)]
    pub media_root: Option<PathBuf>,

    /// Enable debug logging (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

/// Filters for the list command
#[derive(Debug, Args)]
pub struct ListFilters {
    /// Filter by player name (case-insensitive substring match).
    #[clap(long, short = 'n')]
    pub name: Option<String>,

    /// Sort order: id | name.
    #[clap(long, default_value_t = PlayerOrder::Id)]
    pub order: PlayerOrder,

    /// Maximum number of players to show.
    #[clap(long)]
    pub limit: Option<u32>,
}

impl From<ListFilters> for PlayerQuery {
    fn from(filters: ListFilters) -> Self {
        PlayerQuery {
            name_contains: filters.name,
            order: filters.order,
            limit: filters.limit,
        }
    }
}

#[derive(Debug, Parser)]
#[clap(name = "football-players", about = "Football player registry with image uploads")]
pub struct FootballPlayers {
    #[clap(flatten)]
    pub global: GlobalOptions,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Register a player with a name and an image upload.
    Add {
        /// Player name (1 to 200 characters).
        name: String,

        /// Image file to upload (PNG, JPEG, GIF, WebP, BMP, ICO or TIFF).
        image: PathBuf,

        /// Output the stored record as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Show a single player.
    Show {
        id: PlayerId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List stored players.
    List {
        #[clap(flatten)]
        filters: ListFilters,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Change a player's name and/or image.
    Update {
        id: PlayerId,

        /// New player name.
        #[clap(long)]
        name: Option<String>,

        /// New image file to upload.
        #[clap(long)]
        image: Option<PathBuf>,

        /// Keep the previous image file in media storage.
        #[clap(long)]
        keep_old_image: bool,

        /// Output the stored record as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Delete a player.
    Delete {
        id: PlayerId,

        /// Leave the image file in media storage.
        #[clap(long)]
        keep_image: bool,
    },

    /// Print the on-disk path of a player's image.
    ImagePath { id: PlayerId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let app = FootballPlayers::try_parse_from([
            "football-players",
            "add",
            "Pelé",
            "pele.png",
            "--json",
        ])
        .unwrap();

        match app.command {
            Commands::Add { name, image, json } => {
                assert_eq!(name, "Pelé");
                assert_eq!(image, PathBuf::from("pele.png"));
                assert!(json);
            }
            other => panic!("Expected Add, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_filters() {
        let app = FootballPlayers::try_parse_from([
            "football-players",
            "list",
            "-n",
            "ron",
            "--order",
            "name",
            "--limit",
            "5",
        ])
        .unwrap();

        match app.command {
            Commands::List { filters, json } => {
                assert!(!json);
                let query = PlayerQuery::from(filters);
                assert_eq!(query.name_contains.as_deref(), Some("ron"));
                assert_eq!(query.order, PlayerOrder::Name);
                assert_eq!(query.limit, Some(5));
            }
            other => panic!("Expected List, got {:?}", other),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let app = FootballPlayers::try_parse_from([
            "football-players",
            "show",
            "7",
            "--db",
            "/tmp/p.db",
            "-v",
        ])
        .unwrap();

        assert_eq!(app.global.db, Some(PathBuf::from("/tmp/p.db")));
        assert!(app.global.verbose);
        assert!(matches!(app.command, Commands::Show { id, .. } if id == PlayerId::new(7)));
    }

    #[test]
    fn test_rejects_invalid_id() {
        assert!(FootballPlayers::try_parse_from(["football-players", "delete", "seven"]).is_err());
    }
}

//! Command implementations for the football players CLI

pub mod add_player;
pub mod common;
pub mod delete_player;
pub mod image_path;
pub mod list_players;
pub mod show_player;
pub mod update_player;


pub use common::CommandContext;

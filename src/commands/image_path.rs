//! Image path command implementation

use std::path::PathBuf;

use crate::{error::PlayerError, PlayerId, Result};

use super::common::CommandContext;

/// Resolve a player's image reference to a file on disk and print it
pub fn handle_image_path(ctx: &CommandContext, id: PlayerId) -> Result<PathBuf> {
    let player = ctx.db.require_player(id)?;
    let path = ctx.media.resolve(&player.img);

    if !path.is_file() {
        return Err(PlayerError::ImageMissing {
            path: path.display().to_string(),
        });
    }

    println!("{}", path.display()); // tarpaulin::skip
    Ok(path)
}

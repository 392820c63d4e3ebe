//! Update player command implementation

use std::path::PathBuf;

use tracing::{info, warn};

use crate::{
    storage::{FootballPlayer, PlayerUpdate},
    PlayerId, PlayerName, Result,
};

use super::common::{print_player, CommandContext};

/// Parameters for the update command
#[derive(Debug)]
pub struct UpdatePlayerParams {
    pub id: PlayerId,
    pub name: Option<String>,
    pub image: Option<PathBuf>,
    /// Keep the previous image file when a new one replaces it
    pub keep_old_image: bool,
    pub as_json: bool,
}

/// Handle the update command
pub fn handle_update_player(
    ctx: &mut CommandContext,
    params: UpdatePlayerParams,
) -> Result<FootballPlayer> {
    let existing = ctx.db.require_player(params.id)?;
    let name = params.name.map(PlayerName::new).transpose()?;

    let stored = match &params.image {
        Some(path) => Some(ctx.media.save(path)?),
        None => None,
    };

    let update = PlayerUpdate {
        name,
        img: stored.as_ref().map(|s| s.reference.clone()),
    };

    let player = match ctx.db.update_player(params.id, &update) {
        Ok(player) => player,
        Err(e) => {
            if let Some(stored) = &stored {
                if let Err(cleanup) = ctx.media.delete(&stored.reference) {
                    warn!(error = %cleanup, reference = %stored.reference, "Failed to remove orphaned image");
                }
            }
            return Err(e);
        }
    };

    if stored.is_some() && !params.keep_old_image && existing.img != player.img {
        if let Err(e) = ctx.media.delete(&existing.img) {
            warn!(error = %e, reference = %existing.img, "Failed to remove replaced image");
        }
    }

    match &stored {
        Some(stored) => info!(
            id = %player.id,
            image = %stored.reference,
            format = %stored.format,
            width = stored.width,
            height = stored.height,
            "Updated player"
        ),
        None => info!(id = %player.id, "Updated player"),
    }
    print_player(&player, params.as_json)?;

    Ok(player)
}

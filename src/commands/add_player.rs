//! Add player command implementation

use std::path::PathBuf;

use tracing::{info, warn};

use crate::{
    storage::{FootballPlayer, NewFootballPlayer},
    PlayerName, Result,
};

use super::common::{print_player, CommandContext};

/// Parameters for the add command
#[derive(Debug)]
pub struct AddPlayerParams {
    pub name: String,
    pub image: PathBuf,
    pub as_json: bool,
}

/// Handle the add command
///
/// The name is validated before the upload is touched. If the insert fails the
/// stored image is removed again so no orphan file is left behind.
pub fn handle_add_player(ctx: &mut CommandContext, params: AddPlayerParams) -> Result<FootballPlayer> {
    let name = PlayerName::new(params.name)?;
    let stored = ctx.media.save(&params.image)?;

    let new_player = NewFootballPlayer {
        name,
        img: stored.reference.clone(),
    };

    let player = match ctx.db.insert_player(&new_player) {
        Ok(player) => player,
        Err(e) => {
            if let Err(cleanup) = ctx.media.delete(&stored.reference) {
                warn!(error = %cleanup, reference = %stored.reference, "Failed to remove orphaned image");
            }
            return Err(e);
        }
    };

    info!(
        id = %player.id,
        name = %player.name,
        format = %stored.format,
        width = stored.width,
        height = stored.height,
        "Added player"
    );
    print_player(&player, params.as_json)?;

    Ok(player)
}

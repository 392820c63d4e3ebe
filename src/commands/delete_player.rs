//! Delete player command implementation

use tracing::{info, warn};

use crate::{storage::FootballPlayer, PlayerId, Result};

use super::common::CommandContext;

/// Handle the delete command
///
/// The image file is removed along with the record unless `keep_image` is set.
/// A missing image file does not fail the command.
pub fn handle_delete_player(
    ctx: &mut CommandContext,
    id: PlayerId,
    keep_image: bool,
) -> Result<FootballPlayer> {
    let player = ctx.db.delete_player(id)?;

    if !keep_image {
        if let Err(e) = ctx.media.delete(&player.img) {
            warn!(error = %e, reference = %player.img, "Failed to remove player image");
        }
    }

    info!(id = %player.id, name = %player.name, "Deleted player");
    println!("Deleted player {} ({})", player.id, player.name); // tarpaulin::skip

    Ok(player)
}

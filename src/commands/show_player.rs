//! Show player command implementation

use crate::{storage::FootballPlayer, PlayerId, Result};

use super::common::{print_player, CommandContext};

/// Handle the show command
pub fn handle_show_player(
    ctx: &CommandContext,
    id: PlayerId,
    as_json: bool,
) -> Result<FootballPlayer> {
    let player = ctx.db.require_player(id)?;
    print_player(&player, as_json)?;
    Ok(player)
}

//! List players command implementation

use crate::{
    storage::{FootballPlayer, PlayerQuery},
    Result,
};

use super::common::{format_player_line, print_json, CommandContext};

/// Handle the list command
pub fn handle_list_players(
    ctx: &CommandContext,
    query: &PlayerQuery,
    as_json: bool,
) -> Result<Vec<FootballPlayer>> {
    let players = ctx.db.list_players(query)?;
    tracing::debug!(count = players.len(), "Listed players");

    if as_json {
        print_json(&players)?;
    } else if players.is_empty() {
        println!("No players found"); // tarpaulin::skip
    } else {
        for player in &players {
            println!("{}", format_player_line(player)); // tarpaulin::skip
        }
    }

    Ok(players)
}

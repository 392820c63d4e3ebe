//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Result;
use clap::Parser;
use football_players::{
    cli::{Commands, FootballPlayers},
    commands::{
        add_player::{handle_add_player, AddPlayerParams},
        delete_player::handle_delete_player,
        image_path::handle_image_path,
        list_players::handle_list_players,
        show_player::handle_show_player,
        update_player::{handle_update_player, UpdatePlayerParams},
        CommandContext,
    },
    core::{logging::init_cli_logger, Settings},
    storage::PlayerQuery,
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = FootballPlayers::parse();
    init_cli_logger(app.global.verbose);

    let settings = Settings::resolve(app.global.db, app.global.media_root)?;
    let mut ctx = CommandContext::new(&settings)?;

    match app.command {
        Commands::Add { name, image, json } => {
            handle_add_player(
                &mut ctx,
                AddPlayerParams {
                    name,
                    image,
                    as_json: json,
                },
            )?;
        }

        Commands::Show { id, json } => {
            handle_show_player(&ctx, id, json)?;
        }

        Commands::List { filters, json } => {
            handle_list_players(&ctx, &PlayerQuery::from(filters), json)?;
        }

        Commands::Update {
            id,
            name,
            image,
            keep_old_image,
            json,
        } => {
            handle_update_player(
                &mut ctx,
                UpdatePlayerParams {
                    id,
                    name,
                    image,
                    keep_old_image,
                    as_json: json,
                },
            )?;
        }

        Commands::Delete { id, keep_image } => {
            handle_delete_player(&mut ctx, id, keep_image)?;
        }

        Commands::ImagePath { id } => {
            handle_image_path(&ctx, id)?;
        }
    }

    Ok(())
}

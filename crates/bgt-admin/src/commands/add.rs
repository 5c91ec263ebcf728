//! Add command implementation.

use anyhow::{Context, Result};
use clap::Args;

use bgt_client::{MasonPlayerDirectory, NewPlayer, PlayerDirectory};

use crate::output;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Name of the player to create
    pub name: String,
}

pub async fn run(directory: &MasonPlayerDirectory, args: AddArgs) -> Result<()> {
    let collection = directory
        .list()
        .await
        .context("Failed to fetch the player collection")?;

    let created = directory
        .create(&collection, &NewPlayer::new(args.name.as_str()))
        .await
        .context("Failed to create player")?;

    match created {
        Some(player) => {
            output::success(&format!("Created player '{}'", player.name));
            if let Some(location) = &player.location {
                output::field("Location", location);
            }
        }
        // The server accepted the player but sent no Location to follow.
        None => output::success("Successful"),
    }

    Ok(())
}

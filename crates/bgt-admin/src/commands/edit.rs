//! Edit command implementation.

use anyhow::{Context, Result};
use clap::Args;

use bgt_client::{MasonPlayerDirectory, NewPlayer, PlayerDirectory};

use crate::commands::find_player;
use crate::output;

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Current name of the player
    pub name: String,

    /// New name for the player
    #[arg(long = "name")]
    pub new_name: String,
}

pub async fn run(directory: &MasonPlayerDirectory, args: EditArgs) -> Result<()> {
    let player = find_player(directory, &args.name).await?;

    directory
        .update(&player, &NewPlayer::new(args.new_name.as_str()))
        .await
        .context("Failed to update player")?;

    output::success(&format!(
        "Renamed player '{}' to '{}'",
        args.name, args.new_name
    ));
    Ok(())
}

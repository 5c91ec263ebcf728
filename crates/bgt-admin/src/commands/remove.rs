//! Remove command implementation.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;

use bgt_client::{MasonPlayerDirectory, PlayerDirectory};

use crate::commands::find_player;
use crate::output;

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Name of the player to delete
    pub name: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,
}

pub async fn run(directory: &MasonPlayerDirectory, args: RemoveArgs) -> Result<()> {
    let player = find_player(directory, &args.name).await?;

    if !args.force && !confirm(&player.name)? {
        println!("Aborted.");
        return Ok(());
    }

    directory
        .remove(&player)
        .await
        .context("Failed to delete player")?;

    output::success(&format!("Deleted player '{}'", player.name));
    Ok(())
}

fn confirm(name: &str) -> Result<bool> {
    print!("Delete player '{name}'? [y/N] ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

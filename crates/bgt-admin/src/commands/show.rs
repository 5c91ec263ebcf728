//! Show command implementation.

use anyhow::{Context, Result};
use clap::Args;

use bgt_client::{DetailView, MasonPlayerDirectory};

use crate::commands::find_player;
use crate::output;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Player name
    pub name: String,

    /// Print the raw representation as JSON instead of the detail view
    #[arg(long)]
    pub json: bool,
}

pub async fn run(directory: &MasonPlayerDirectory, args: ShowArgs) -> Result<()> {
    let player = find_player(directory, &args.name).await?;

    if args.json {
        return output::json_pretty(&player);
    }

    let view = DetailView::from_player(&player)
        .context("Player response is missing expected controls")?;

    output::detail_view(&view);
    Ok(())
}

//! List command implementation.

use anyhow::{Context, Result};
use clap::Args;

use bgt_client::{ListView, MasonPlayerDirectory, PlayerDirectory};

use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print the raw collection as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub async fn run(directory: &MasonPlayerDirectory, args: ListArgs) -> Result<()> {
    let collection = directory
        .list()
        .await
        .context("Failed to fetch the player collection")?;

    if args.json {
        return output::json_pretty(&collection);
    }

    let view = ListView::from_collection(&collection)
        .context("Collection response is missing expected controls")?;

    output::list_view(&view);
    Ok(())
}

//! Subcommand implementations.

pub mod add;
pub mod browse;
pub mod edit;
pub mod list;
pub mod remove;
pub mod show;

use anyhow::{Context, Result, bail};
use tracing::debug;

use bgt_client::{ApiUrl, MasonPlayerDirectory, Player, PlayerDirectory};

use crate::cli::Commands;

pub async fn handle(api: ApiUrl, command: Commands) -> Result<()> {
    let directory = MasonPlayerDirectory::new(api);

    match command {
        Commands::List(args) => list::run(&directory, args).await,
        Commands::Show(args) => show::run(&directory, args).await,
        Commands::Add(args) => add::run(&directory, args).await,
        Commands::Edit(args) => edit::run(&directory, args).await,
        Commands::Remove(args) => remove::run(&directory, args).await,
        Commands::Browse(args) => browse::run(directory, args).await,
    }
}

/// Look a player up by name: fetch the collection, find the matching row,
/// and follow its show link.
pub async fn find_player(directory: &MasonPlayerDirectory, name: &str) -> Result<Player> {
    let collection = directory
        .list()
        .await
        .context("Failed to fetch the player collection")?;

    let Some(item) = collection.items.iter().find(|item| item.name == name) else {
        bail!("No player named '{name}'");
    };

    let href = item
        .controls
        .get(bgt_client::mason::relations::SELF)
        .context("Player row has no show link")?
        .href
        .clone();
    debug!(name, %href, "Following row's show link");

    directory
        .player_at(&href)
        .await
        .with_context(|| format!("Failed to fetch player '{name}'"))
}

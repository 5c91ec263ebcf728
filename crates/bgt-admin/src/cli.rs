//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{add, browse, edit, list, remove, show};

/// Default collection entry URL for a locally running server.
const DEFAULT_API_URL: &str = "http://localhost:5000/api/players/";

/// Admin console for the BoardGameTracker player API.
#[derive(Parser, Debug)]
#[command(name = "bgt-admin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API collection entry URL (overrides BGT_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The entry URL to use: flag, then BGT_API_URL, then the local default.
    pub fn api_url(&self) -> String {
        self.api_url
            .clone()
            .or_else(|| std::env::var("BGT_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all players
    List(list::ListArgs),

    /// Show one player
    Show(show::ShowArgs),

    /// Add a new player
    Add(add::AddArgs),

    /// Edit a player
    Edit(edit::EditArgs),

    /// Remove a player
    Remove(remove::RemoveArgs),

    /// Browse the console interactively
    Browse(browse::BrowseArgs),
}

//! bgt-client - Typed Mason hypermedia client for the BoardGameTracker
//! player API.
//!
//! The server describes every available action as a hypermedia control
//! embedded in its responses; this library follows those controls instead
//! of hard-coding routes, and surfaces missing relations and malformed
//! error bodies as recoverable typed errors.
//!
//! # Example
//!
//! ```no_run
//! use bgt_client::{ApiUrl, MasonPlayerDirectory, NewPlayer, PlayerDirectory};
//!
//! # async fn example() -> Result<(), bgt_client::Error> {
//! let api = ApiUrl::new("http://localhost:5000/api/players/")?;
//! let directory = MasonPlayerDirectory::new(api);
//!
//! let collection = directory.list().await?;
//! for item in &collection.items {
//!     println!("{}", item.name);
//! }
//!
//! let created = directory.create(&collection, &NewPlayer::new("Ada")).await?;
//! println!("created: {:?}", created.map(|p| p.name));
//! # Ok(())
//! # }
//! ```

pub mod console;
pub mod directory;
pub mod error;
pub mod http;
pub mod mason;
pub mod types;

// Re-export primary types at crate root for convenience
pub use console::{Console, DetailView, FormView, ListView, Notification, Screen};
pub use directory::{MasonPlayerDirectory, NewPlayer, PlayerDirectory};
pub use error::Error;
pub use http::{MasonClient, Submission};
pub use mason::{Control, Controls, Player, PlayerCollection, PlayerSummary, Schema};
pub use types::ApiUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

//! Player directory abstraction.
//!
//! This module provides the operations the admin console performs against
//! the player API, behind a trait so that the console state machine can be
//! exercised without a network.

mod mason;

use async_trait::async_trait;
use serde::Serialize;

use crate::Result;
use crate::mason::{Player, PlayerCollection};

pub use mason::MasonPlayerDirectory;

/// Input for creating or editing a player.
///
/// Matches the server's player schema: one required `name` field. The
/// client performs no validation of its own beyond what the schema states.
#[derive(Debug, Clone, Serialize)]
pub struct NewPlayer {
    pub name: String,
}

impl NewPlayer {
    /// Create a new player payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Operations on the player directory.
///
/// Every call is one independent request/response pair; no two calls are
/// coordinated or ordered relative to each other.
#[async_trait]
pub trait PlayerDirectory: Send + Sync {
    /// Fetch the player collection from the configured entry point.
    async fn list(&self) -> Result<PlayerCollection>;

    /// Fetch the player collection at a specific href (e.g. a breadcrumb).
    async fn collection_at(&self, href: &str) -> Result<PlayerCollection>;

    /// Fetch one player's long representation at an href (from a row's
    /// `self` control).
    async fn player_at(&self, href: &str) -> Result<Player>;

    /// Create a player through the collection's add control.
    ///
    /// When the success response carries a `Location` header, the created
    /// resource is fetched and returned; otherwise `None`.
    async fn create(
        &self,
        collection: &PlayerCollection,
        player: &NewPlayer,
    ) -> Result<Option<Player>>;

    /// Update a player through its edit control.
    async fn update(&self, player: &Player, changes: &NewPlayer) -> Result<()>;

    /// Delete a player through its delete control.
    async fn remove(&self, player: &Player) -> Result<()>;
}

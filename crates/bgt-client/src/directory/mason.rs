//! Network-backed player directory over the Mason API.

use async_trait::async_trait;
use tracing::{debug, instrument};

use super::{NewPlayer, PlayerDirectory};
use crate::Result;
use crate::http::{MasonClient, Submission};
use crate::mason::{Player, PlayerCollection, relations};
use crate::types::ApiUrl;

/// A player directory backed by the hypermedia API.
///
/// Apart from the entry point, every URL comes from a server-supplied
/// control; nothing else is hard-coded.
#[derive(Debug, Clone)]
pub struct MasonPlayerDirectory {
    client: MasonClient,
}

impl MasonPlayerDirectory {
    /// Create a directory anchored at the collection entry URL.
    pub fn new(base: ApiUrl) -> Self {
        Self {
            client: MasonClient::new(base),
        }
    }

    /// Returns the underlying Mason client.
    pub fn client(&self) -> &MasonClient {
        &self.client
    }
}

#[async_trait]
impl PlayerDirectory for MasonPlayerDirectory {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<PlayerCollection> {
        debug!(base = %self.client.base(), "Fetching player collection");
        self.client.fetch(self.client.base().as_str()).await
    }

    #[instrument(skip(self))]
    async fn collection_at(&self, href: &str) -> Result<PlayerCollection> {
        debug!(href, "Fetching player collection at href");
        self.client.fetch(href).await
    }

    #[instrument(skip(self))]
    async fn player_at(&self, href: &str) -> Result<Player> {
        debug!(href, "Fetching player");
        self.client.fetch(href).await
    }

    #[instrument(skip(self, collection))]
    async fn create(
        &self,
        collection: &PlayerCollection,
        player: &NewPlayer,
    ) -> Result<Option<Player>> {
        let control = collection.controls.get(relations::ADD_PLAYER)?;

        debug!(name = %player.name, href = %control.href, "Creating player");
        let Submission { status, location } = self.client.submit(control, player).await?;

        match location {
            Some(href) => {
                debug!(status, %href, "Following Location to created player");
                Ok(Some(self.client.fetch(&href).await?))
            }
            None => {
                debug!(status, "Create response carried no Location");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self, player))]
    async fn update(&self, player: &Player, changes: &NewPlayer) -> Result<()> {
        let control = player.controls.get(relations::EDIT)?;

        debug!(name = %player.name, href = %control.href, "Updating player");
        self.client.submit(control, changes).await?;
        Ok(())
    }

    #[instrument(skip(self, player))]
    async fn remove(&self, player: &Player) -> Result<()> {
        let control = player.controls.get(relations::DELETE)?;

        debug!(name = %player.name, href = %control.href, "Deleting player");
        self.client.submit_empty(control).await?;
        Ok(())
    }
}

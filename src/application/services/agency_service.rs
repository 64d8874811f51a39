//! Agency Service - Client management and client voice-pack links

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::application::ports::outbound::{AgencyClientRepositoryPort, VoicePackRepositoryPort};
use crate::domain::entities::{AgencyClient, VoicePack};
use crate::domain::value_objects::{ClientId, UserId, VoicePackId};

/// Service for agency-mode use cases
pub struct AgencyService {
    clients: Arc<dyn AgencyClientRepositoryPort>,
    voice_packs: Arc<dyn VoicePackRepositoryPort>,
}

impl AgencyService {
    pub fn new(
        clients: Arc<dyn AgencyClientRepositoryPort>,
        voice_packs: Arc<dyn VoicePackRepositoryPort>,
    ) -> Self {
        Self {
            clients,
            voice_packs,
        }
    }

    #[instrument(skip(self), fields(name = %name))]
    pub async fn create_client(
        &self,
        user_id: UserId,
        name: String,
        notes: Option<String>,
    ) -> Result<AgencyClient> {
        if name.trim().is_empty() {
            anyhow::bail!("Client name cannot be empty");
        }

        let mut client = AgencyClient::new(user_id, name);
        if let Some(notes) = notes {
            client = client.with_notes(notes);
        }

        self.clients
            .create(&client)
            .await
            .context("Failed to create client")?;

        info!(client_id = %client.id, "Created client: {}", client.name);
        Ok(client)
    }

    #[instrument(skip(self))]
    pub async fn list_clients(&self, user_id: UserId) -> Result<Vec<AgencyClient>> {
        self.clients
            .list(user_id)
            .await
            .context("Failed to list clients")
    }

    #[instrument(skip(self))]
    pub async fn delete_client(&self, id: ClientId) -> Result<()> {
        self.clients
            .delete(id)
            .await
            .context("Failed to delete client")?;

        info!(client_id = %id, "Deleted client");
        Ok(())
    }

    /// Link a voice pack to a client; both sides must exist
    #[instrument(skip(self))]
    pub async fn link_voice_pack(&self, client_id: ClientId, pack_id: VoicePackId) -> Result<()> {
        self.clients
            .get(client_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Client not found: {}", client_id))?;

        self.voice_packs
            .get(pack_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Voice pack not found: {}", pack_id))?;

        self.clients
            .link_voice_pack(client_id, pack_id)
            .await
            .context("Failed to link voice pack to client")?;

        info!(client_id = %client_id, pack_id = %pack_id, "Linked voice pack to client");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn unlink_voice_pack(&self, client_id: ClientId, pack_id: VoicePackId) -> Result<()> {
        self.clients
            .unlink_voice_pack(client_id, pack_id)
            .await
            .context("Failed to unlink voice pack from client")
    }

    #[instrument(skip(self))]
    pub async fn list_voice_packs(&self, client_id: ClientId) -> Result<Vec<VoicePack>> {
        self.clients
            .list_voice_packs(client_id)
            .await
            .context("Failed to list client voice packs")
    }
}

//! Voice Pack Service - Application service for voice profile management

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

use crate::application::ports::outbound::VoicePackRepositoryPort;
use crate::domain::entities::VoicePack;
use crate::domain::value_objects::{UserId, VoicePackId};

/// Request to create a new voice pack
#[derive(Debug, Clone)]
pub struct CreateVoicePackRequest {
    pub name: String,
    pub description: Option<String>,
    pub style: Option<String>,
    pub base_prompt: Option<String>,
    pub writing_samples: Vec<String>,
}

/// Request to update an existing voice pack
#[derive(Debug, Clone)]
pub struct UpdateVoicePackRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub style: Option<String>,
    pub base_prompt: Option<String>,
    pub writing_samples: Option<Vec<String>>,
}

/// Service for voice pack use cases
pub struct VoicePackService {
    repository: Arc<dyn VoicePackRepositoryPort>,
}

impl VoicePackService {
    pub fn new(repository: Arc<dyn VoicePackRepositoryPort>) -> Self {
        Self { repository }
    }

    fn validate_create_request(request: &CreateVoicePackRequest) -> Result<()> {
        if request.name.trim().is_empty() {
            anyhow::bail!("Voice pack name cannot be empty");
        }
        if request.name.len() > 255 {
            anyhow::bail!("Voice pack name cannot exceed 255 characters");
        }
        Ok(())
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, user_id: UserId, request: CreateVoicePackRequest) -> Result<VoicePack> {
        Self::validate_create_request(&request)?;

        let mut pack = VoicePack::new(user_id, &request.name)
            .with_samples(request.writing_samples);

        if let Some(description) = request.description {
            pack = pack.with_description(description);
        }
        if let Some(style) = request.style {
            pack = pack.with_style(style);
        }
        pack.base_prompt = request.base_prompt;

        self.repository
            .create(&pack)
            .await
            .context("Failed to create voice pack in repository")?;

        info!(pack_id = %pack.id, "Created voice pack: {}", pack.name);
        Ok(pack)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: VoicePackId) -> Result<Option<VoicePack>> {
        debug!(pack_id = %id, "Fetching voice pack");
        self.repository
            .get(id)
            .await
            .context("Failed to get voice pack from repository")
    }

    #[instrument(skip(self))]
    pub async fn list(&self, user_id: UserId) -> Result<Vec<VoicePack>> {
        self.repository
            .list(user_id)
            .await
            .context("Failed to list voice packs from repository")
    }

    #[instrument(skip(self, request), fields(pack_id = %id))]
    pub async fn update(&self, id: VoicePackId, request: UpdateVoicePackRequest) -> Result<VoicePack> {
        if let Some(ref name) = request.name {
            if name.trim().is_empty() {
                anyhow::bail!("Voice pack name cannot be empty");
            }
        }

        let mut pack = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Voice pack not found: {}", id))?;

        if let Some(name) = request.name {
            pack.name = name;
        }
        if let Some(description) = request.description {
            pack.description = Some(description);
        }
        if let Some(style) = request.style {
            pack.style = style;
        }
        if let Some(base_prompt) = request.base_prompt {
            pack.base_prompt = Some(base_prompt);
        }
        if let Some(samples) = request.writing_samples {
            pack.writing_samples = samples;
        }

        self.repository
            .update(&pack)
            .await
            .context("Failed to update voice pack in repository")?;

        info!(pack_id = %id, "Updated voice pack: {}", pack.name);
        Ok(pack)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: VoicePackId) -> Result<()> {
        self.repository
            .delete(id)
            .await
            .context("Failed to delete voice pack from repository")?;

        info!(pack_id = %id, "Deleted voice pack");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validation() {
        let request = CreateVoicePackRequest {
            name: "".to_string(),
            description: None,
            style: None,
            base_prompt: None,
            writing_samples: vec![],
        };
        assert!(VoicePackService::validate_create_request(&request).is_err());

        let request = CreateVoicePackRequest {
            name: "Founder Voice".to_string(),
            description: Some("Direct, no fluff".to_string()),
            style: Some("professional".to_string()),
            base_prompt: None,
            writing_samples: vec!["sample".to_string()],
        };
        assert!(VoicePackService::validate_create_request(&request).is_ok());

        let request = CreateVoicePackRequest {
            name: "x".repeat(256),
            description: None,
            style: None,
            base_prompt: None,
            writing_samples: vec![],
        };
        assert!(VoicePackService::validate_create_request(&request).is_err());
    }
}

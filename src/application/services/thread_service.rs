//! Thread Service - Application service for saved thread management

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};

use crate::application::ports::outbound::ThreadRepositoryPort;
use crate::domain::entities::Thread;
use crate::domain::value_objects::{HookType, ThreadId, ThreadStatus, UserId, VoicePackId};

/// Request to save a thread (typically a generated draft)
#[derive(Debug, Clone)]
pub struct CreateThreadRequest {
    pub topic: String,
    pub hook_type: HookType,
    pub content: Vec<String>,
    pub cringe_score: u32,
    pub voice_pack_id: Option<VoicePackId>,
    pub status: Option<ThreadStatus>,
}

/// Partial update to a saved thread
#[derive(Debug, Clone, Default)]
pub struct UpdateThreadRequest {
    pub topic: Option<String>,
    pub content: Option<Vec<String>>,
    pub status: Option<ThreadStatus>,
    pub scheduled_for: Option<DateTime<Utc>>,
}

/// Service for saved-thread use cases
pub struct ThreadService {
    repository: Arc<dyn ThreadRepositoryPort>,
}

impl ThreadService {
    pub fn new(repository: Arc<dyn ThreadRepositoryPort>) -> Self {
        Self { repository }
    }

    fn validate_create_request(request: &CreateThreadRequest) -> Result<()> {
        if request.topic.trim().is_empty() {
            anyhow::bail!("Thread topic cannot be empty");
        }
        if request.content.is_empty() {
            anyhow::bail!("Thread content cannot be empty");
        }
        Ok(())
    }

    #[instrument(skip(self, request), fields(topic = %request.topic))]
    pub async fn create(&self, user_id: UserId, request: CreateThreadRequest) -> Result<Thread> {
        Self::validate_create_request(&request)?;

        let mut thread = Thread::new(user_id, &request.topic, request.hook_type)
            .with_content(request.content, request.cringe_score);

        if let Some(pack_id) = request.voice_pack_id {
            thread = thread.with_voice_pack(pack_id);
        }
        if let Some(status) = request.status {
            thread.status = status;
        }

        self.repository
            .create(&thread)
            .await
            .context("Failed to create thread in repository")?;

        info!(thread_id = %thread.id, "Saved thread: {}", thread.topic);
        Ok(thread)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: ThreadId) -> Result<Option<Thread>> {
        debug!(thread_id = %id, "Fetching thread");
        self.repository
            .get(id)
            .await
            .context("Failed to get thread from repository")
    }

    #[instrument(skip(self))]
    pub async fn list(&self, user_id: UserId) -> Result<Vec<Thread>> {
        self.repository
            .list(user_id)
            .await
            .context("Failed to list threads from repository")
    }

    #[instrument(skip(self, request), fields(thread_id = %id))]
    pub async fn update(&self, id: ThreadId, request: UpdateThreadRequest) -> Result<Thread> {
        let mut thread = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Thread not found: {}", id))?;

        if let Some(topic) = request.topic {
            if topic.trim().is_empty() {
                anyhow::bail!("Thread topic cannot be empty");
            }
            thread.topic = topic;
        }
        if let Some(content) = request.content {
            thread.content = content;
        }
        if let Some(at) = request.scheduled_for {
            thread.schedule(at);
        }
        // An explicit status wins over the schedule() transition
        if let Some(status) = request.status {
            if status == ThreadStatus::Posted {
                thread.mark_posted();
            } else {
                thread.status = status;
            }
        }

        self.repository
            .update(&thread)
            .await
            .context("Failed to update thread in repository")?;

        info!(thread_id = %id, status = %thread.status, "Updated thread");
        Ok(thread)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: ThreadId) -> Result<()> {
        self.repository
            .delete(id)
            .await
            .context("Failed to delete thread from repository")?;

        info!(thread_id = %id, "Deleted thread");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validation() {
        let request = CreateThreadRequest {
            topic: " ".to_string(),
            hook_type: HookType::Story,
            content: vec!["tweet".to_string()],
            cringe_score: 0,
            voice_pack_id: None,
            status: None,
        };
        assert!(ThreadService::validate_create_request(&request).is_err());

        let request = CreateThreadRequest {
            topic: "indie hacking".to_string(),
            hook_type: HookType::Story,
            content: vec![],
            cringe_score: 0,
            voice_pack_id: None,
            status: None,
        };
        assert!(ThreadService::validate_create_request(&request).is_err());

        let request = CreateThreadRequest {
            topic: "indie hacking".to_string(),
            hook_type: HookType::Story,
            content: vec!["tweet one".to_string()],
            cringe_score: 12,
            voice_pack_id: None,
            status: None,
        };
        assert!(ThreadService::validate_create_request(&request).is_ok());
    }
}

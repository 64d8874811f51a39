//! Voice pack entity - a named writing-style profile with samples

use crate::domain::value_objects::{UserId, VoiceContext, VoicePackId};

/// A personalized writing-style profile.
///
/// Voice packs feed generation as read-only context; the generation core
/// never creates or mutates them.
#[derive(Debug, Clone)]
pub struct VoicePack {
    pub id: VoicePackId,
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    /// personal, professional, casual, ...
    pub style: String,
    pub base_prompt: Option<String>,
    pub writing_samples: Vec<String>,
    pub is_default: bool,
}

impl VoicePack {
    pub fn new(user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            id: VoicePackId::new(),
            user_id,
            name: name.into(),
            description: None,
            style: "personal".to_string(),
            base_prompt: None,
            writing_samples: Vec::new(),
            is_default: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_samples(mut self, samples: Vec<String>) -> Self {
        self.writing_samples = samples;
        self
    }

    /// Snapshot the prompt-facing fields for the generation core
    pub fn voice_context(&self) -> VoiceContext {
        VoiceContext {
            style: self.style.clone(),
            description: self.description.clone(),
            writing_samples: self.writing_samples.clone(),
        }
    }
}

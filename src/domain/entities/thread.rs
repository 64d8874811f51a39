//! Thread entity - an ordered sequence of tweets forming one unit of content

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{HookType, ThreadId, ThreadStatus, UserId, VoicePackId};

/// A composed Twitter/X thread.
///
/// `content` is the ordered tweet list; `cringe_score` is the lexical
/// scorer's verdict at generation time.
#[derive(Debug, Clone)]
pub struct Thread {
    pub id: ThreadId,
    pub user_id: UserId,
    pub voice_pack_id: Option<VoicePackId>,
    pub topic: String,
    pub hook_type: HookType,
    pub status: ThreadStatus,
    pub content: Vec<String>,
    pub cringe_score: Option<u32>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub posted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Thread {
    pub fn new(user_id: UserId, topic: impl Into<String>, hook_type: HookType) -> Self {
        Self {
            id: ThreadId::new(),
            user_id,
            voice_pack_id: None,
            topic: topic.into(),
            hook_type,
            status: ThreadStatus::Draft,
            content: Vec::new(),
            cringe_score: None,
            scheduled_for: None,
            posted_at: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_content(mut self, content: Vec<String>, cringe_score: u32) -> Self {
        self.content = content;
        self.cringe_score = Some(cringe_score);
        self
    }

    pub fn with_voice_pack(mut self, voice_pack_id: VoicePackId) -> Self {
        self.voice_pack_id = Some(voice_pack_id);
        self
    }

    /// Move the thread into the scheduled state
    pub fn schedule(&mut self, at: DateTime<Utc>) {
        self.status = ThreadStatus::Scheduled;
        self.scheduled_for = Some(at);
    }

    /// Mark the thread as posted now
    pub fn mark_posted(&mut self) {
        self.status = ThreadStatus::Posted;
        self.posted_at = Some(Utc::now());
    }
}

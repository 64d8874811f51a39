//! Connected social account entity

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{AccountId, UserId};

/// A linked social platform account (X, LinkedIn, ...)
#[derive(Debug, Clone)]
pub struct ConnectedAccount {
    pub id: AccountId,
    pub user_id: UserId,
    pub platform: String,
    pub handle: String,
    pub connected_at: DateTime<Utc>,
}

impl ConnectedAccount {
    pub fn new(
        user_id: UserId,
        platform: impl Into<String>,
        handle: impl Into<String>,
    ) -> Self {
        Self {
            id: AccountId::new(),
            user_id,
            platform: platform.into(),
            handle: handle.into(),
            connected_at: Utc::now(),
        }
    }
}

//! Thread analytics entity - one recorded performance snapshot per thread

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{AnalyticsId, ThreadId};

/// Performance counters recorded for a posted thread
#[derive(Debug, Clone)]
pub struct ThreadAnalytics {
    pub id: AnalyticsId,
    pub thread_id: ThreadId,
    pub impressions: u64,
    pub likes: u64,
    pub replies: u64,
    pub retweets: u64,
    pub profile_clicks: u64,
    pub recorded_at: DateTime<Utc>,
}

impl ThreadAnalytics {
    pub fn new(thread_id: ThreadId) -> Self {
        Self {
            id: AnalyticsId::new(),
            thread_id,
            impressions: 0,
            likes: 0,
            replies: 0,
            retweets: 0,
            profile_clicks: 0,
            recorded_at: Utc::now(),
        }
    }
}

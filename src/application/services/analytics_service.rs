//! Analytics Service - Thread performance rows and aggregate summaries

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::application::ports::outbound::{AnalyticsRepositoryPort, ThreadRepositoryPort};
use crate::domain::entities::ThreadAnalytics;
use crate::domain::value_objects::{AnalyticsSummary, ThreadId, UserId};

/// Request to record a performance snapshot for a thread
#[derive(Debug, Clone)]
pub struct RecordAnalyticsRequest {
    pub thread_id: ThreadId,
    pub impressions: u64,
    pub likes: u64,
    pub replies: u64,
    pub retweets: u64,
    pub profile_clicks: u64,
}

/// Service for analytics use cases
pub struct AnalyticsService {
    analytics: Arc<dyn AnalyticsRepositoryPort>,
    threads: Arc<dyn ThreadRepositoryPort>,
}

impl AnalyticsService {
    pub fn new(
        analytics: Arc<dyn AnalyticsRepositoryPort>,
        threads: Arc<dyn ThreadRepositoryPort>,
    ) -> Self {
        Self { analytics, threads }
    }

    #[instrument(skip(self, request), fields(thread_id = %request.thread_id))]
    pub async fn record(&self, request: RecordAnalyticsRequest) -> Result<ThreadAnalytics> {
        // The row must describe a thread that exists
        self.threads
            .get(request.thread_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Thread not found: {}", request.thread_id))?;

        let mut row = ThreadAnalytics::new(request.thread_id);
        row.impressions = request.impressions;
        row.likes = request.likes;
        row.replies = request.replies;
        row.retweets = request.retweets;
        row.profile_clicks = request.profile_clicks;

        self.analytics
            .create(&row)
            .await
            .context("Failed to record analytics row")?;

        debug!(analytics_id = %row.id, "Recorded analytics row");
        Ok(row)
    }

    #[instrument(skip(self))]
    pub async fn list(&self, user_id: UserId) -> Result<Vec<ThreadAnalytics>> {
        self.analytics
            .list(user_id)
            .await
            .context("Failed to list analytics rows")
    }

    #[instrument(skip(self))]
    pub async fn summary(&self, user_id: UserId) -> Result<AnalyticsSummary> {
        self.analytics
            .summary(user_id)
            .await
            .context("Failed to compute analytics summary")
    }
}

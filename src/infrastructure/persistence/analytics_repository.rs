//! SQLite repository for thread analytics

use std::str::FromStr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::application::ports::outbound::AnalyticsRepositoryPort;
use crate::domain::entities::ThreadAnalytics;
use crate::domain::value_objects::{AnalyticsId, AnalyticsSummary, ThreadId, UserId};

pub struct SqliteAnalyticsRepository {
    pool: SqlitePool,
}

type AnalyticsRow = (
    String,        // id
    String,        // thread_id
    i64,           // impressions
    i64,           // likes
    i64,           // replies
    i64,           // retweets
    i64,           // profile_clicks
    DateTime<Utc>, // recorded_at
);

impl SqliteAnalyticsRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS thread_analytics (
                id TEXT PRIMARY KEY,
                thread_id TEXT NOT NULL,
                impressions INTEGER NOT NULL DEFAULT 0,
                likes INTEGER NOT NULL DEFAULT 0,
                replies INTEGER NOT NULL DEFAULT 0,
                retweets INTEGER NOT NULL DEFAULT 0,
                profile_clicks INTEGER NOT NULL DEFAULT 0,
                recorded_at TIMESTAMP NOT NULL
            )
        "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    fn to_entity(row: AnalyticsRow) -> Result<ThreadAnalytics> {
        let (id, thread_id, impressions, likes, replies, retweets, profile_clicks, recorded_at) =
            row;

        Ok(ThreadAnalytics {
            id: AnalyticsId::from_str(&id).context("Invalid analytics ID in database")?,
            thread_id: ThreadId::from_str(&thread_id).context("Invalid thread ID in database")?,
            impressions: impressions as u64,
            likes: likes as u64,
            replies: replies as u64,
            retweets: retweets as u64,
            profile_clicks: profile_clicks as u64,
            recorded_at,
        })
    }
}

#[async_trait]
impl AnalyticsRepositoryPort for SqliteAnalyticsRepository {
    async fn create(&self, analytics: &ThreadAnalytics) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO thread_analytics (id, thread_id, impressions, likes, replies, retweets, profile_clicks, recorded_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
        )
        .bind(analytics.id.to_string())
        .bind(analytics.thread_id.to_string())
        .bind(analytics.impressions as i64)
        .bind(analytics.likes as i64)
        .bind(analytics.replies as i64)
        .bind(analytics.retweets as i64)
        .bind(analytics.profile_clicks as i64)
        .bind(analytics.recorded_at)
        .execute(&self.pool)
        .await
        .context("Failed to insert analytics row")?;

        Ok(())
    }

    async fn list(&self, user_id: UserId) -> Result<Vec<ThreadAnalytics>> {
        let rows: Vec<AnalyticsRow> = sqlx::query_as(
            r#"
            SELECT a.id, a.thread_id, a.impressions, a.likes, a.replies, a.retweets, a.profile_clicks, a.recorded_at
            FROM thread_analytics a
            JOIN threads t ON t.id = a.thread_id
            WHERE t.user_id = ?
            ORDER BY a.recorded_at DESC
        "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .context("Failed to list analytics rows")?;

        rows.into_iter().map(Self::to_entity).collect()
    }

    async fn summary(&self, user_id: UserId) -> Result<AnalyticsSummary> {
        let (impressions, likes, replies, retweets, profile_clicks): (i64, i64, i64, i64, i64) =
            sqlx::query_as(
                r#"
                SELECT
                    COALESCE(SUM(a.impressions), 0),
                    COALESCE(SUM(a.likes), 0),
                    COALESCE(SUM(a.replies), 0),
                    COALESCE(SUM(a.retweets), 0),
                    COALESCE(SUM(a.profile_clicks), 0)
                FROM thread_analytics a
                JOIN threads t ON t.id = a.thread_id
                WHERE t.user_id = ?
            "#,
            )
            .bind(user_id.to_string())
            .fetch_one(&self.pool)
            .await
            .context("Failed to compute analytics summary")?;

        let engagement_rate = AnalyticsSummary::compute_engagement_rate(
            impressions as u64,
            likes as u64,
            replies as u64,
            retweets as u64,
        );

        Ok(AnalyticsSummary {
            total_impressions: impressions as u64,
            total_likes: likes as u64,
            total_replies: replies as u64,
            total_retweets: retweets as u64,
            total_profile_clicks: profile_clicks as u64,
            engagement_rate,
        })
    }
}

//! SQLite repository for saved threads

use std::str::FromStr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::application::ports::outbound::ThreadRepositoryPort;
use crate::domain::entities::Thread;
use crate::domain::value_objects::{HookType, ThreadId, ThreadStatus, UserId, VoicePackId};

pub struct SqliteThreadRepository {
    pool: SqlitePool,
}

type ThreadRow = (
    String,                    // id
    String,                    // user_id
    Option<String>,            // voice_pack_id
    String,                    // topic
    String,                    // hook_type
    String,                    // status
    String,                    // content (JSON)
    Option<i64>,               // cringe_score
    Option<DateTime<Utc>>,     // scheduled_for
    Option<DateTime<Utc>>,     // posted_at
    DateTime<Utc>,             // created_at
);

impl SqliteThreadRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS threads (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                voice_pack_id TEXT,
                topic TEXT NOT NULL,
                hook_type TEXT NOT NULL DEFAULT 'negative',
                status TEXT NOT NULL DEFAULT 'draft',
                content TEXT NOT NULL DEFAULT '[]',
                cringe_score INTEGER,
                scheduled_for TIMESTAMP,
                posted_at TIMESTAMP,
                created_at TIMESTAMP NOT NULL
            )
        "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    fn to_entity(row: ThreadRow) -> Result<Thread> {
        let (
            id,
            user_id,
            voice_pack_id,
            topic,
            hook_type,
            status,
            content,
            cringe_score,
            scheduled_for,
            posted_at,
            created_at,
        ) = row;

        Ok(Thread {
            id: ThreadId::from_str(&id).context("Invalid thread ID in database")?,
            user_id: UserId::from_str(&user_id).context("Invalid user ID in database")?,
            voice_pack_id: voice_pack_id
                .map(|v| VoicePackId::from_str(&v))
                .transpose()
                .context("Invalid voice pack ID in database")?,
            topic,
            hook_type: HookType::parse_or_default(&hook_type),
            status: ThreadStatus::parse(&status).unwrap_or_default(),
            content: serde_json::from_str(&content)
                .context("Invalid thread content JSON in database")?,
            cringe_score: cringe_score.map(|s| s as u32),
            scheduled_for,
            posted_at,
            created_at,
        })
    }
}

const SELECT_COLUMNS: &str = "id, user_id, voice_pack_id, topic, hook_type, status, content, cringe_score, scheduled_for, posted_at, created_at";

#[async_trait]
impl ThreadRepositoryPort for SqliteThreadRepository {
    async fn create(&self, thread: &Thread) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO threads (id, user_id, voice_pack_id, topic, hook_type, status, content, cringe_score, scheduled_for, posted_at, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
        )
        .bind(thread.id.to_string())
        .bind(thread.user_id.to_string())
        .bind(thread.voice_pack_id.map(|v| v.to_string()))
        .bind(&thread.topic)
        .bind(thread.hook_type.as_str())
        .bind(thread.status.as_str())
        .bind(serde_json::to_string(&thread.content)?)
        .bind(thread.cringe_score.map(|s| s as i64))
        .bind(thread.scheduled_for)
        .bind(thread.posted_at)
        .bind(thread.created_at)
        .execute(&self.pool)
        .await
        .context("Failed to insert thread")?;

        Ok(())
    }

    async fn get(&self, id: ThreadId) -> Result<Option<Thread>> {
        let row: Option<ThreadRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM threads WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch thread")?;

        row.map(Self::to_entity).transpose()
    }

    async fn list(&self, user_id: UserId) -> Result<Vec<Thread>> {
        let rows: Vec<ThreadRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM threads WHERE user_id = ? ORDER BY created_at DESC"
        ))
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .context("Failed to list threads")?;

        rows.into_iter().map(Self::to_entity).collect()
    }

    async fn update(&self, thread: &Thread) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE threads
            SET voice_pack_id = ?, topic = ?, hook_type = ?, status = ?, content = ?, cringe_score = ?, scheduled_for = ?, posted_at = ?
            WHERE id = ?
        "#,
        )
        .bind(thread.voice_pack_id.map(|v| v.to_string()))
        .bind(&thread.topic)
        .bind(thread.hook_type.as_str())
        .bind(thread.status.as_str())
        .bind(serde_json::to_string(&thread.content)?)
        .bind(thread.cringe_score.map(|s| s as i64))
        .bind(thread.scheduled_for)
        .bind(thread.posted_at)
        .bind(thread.id.to_string())
        .execute(&self.pool)
        .await
        .context("Failed to update thread")?;

        Ok(())
    }

    async fn delete(&self, id: ThreadId) -> Result<()> {
        sqlx::query("DELETE FROM threads WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .context("Failed to delete thread")?;

        Ok(())
    }

    async fn list_recent_topics(&self, user_id: UserId, limit: u32) -> Result<Vec<String>> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT topic FROM threads WHERE user_id = ? ORDER BY created_at DESC LIMIT ?",
        )
        .bind(user_id.to_string())
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list recent topics")?;

        Ok(rows.into_iter().map(|(topic,)| topic).collect())
    }

    async fn count(&self, user_id: UserId) -> Result<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM threads WHERE user_id = ?")
            .bind(user_id.to_string())
            .fetch_one(&self.pool)
            .await
            .context("Failed to count threads")?;

        Ok(count as u64)
    }
}

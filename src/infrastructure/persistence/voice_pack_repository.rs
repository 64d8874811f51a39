//! SQLite repository for voice packs

use std::str::FromStr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::application::ports::outbound::VoicePackRepositoryPort;
use crate::domain::entities::VoicePack;
use crate::domain::value_objects::{UserId, VoicePackId};

pub struct SqliteVoicePackRepository {
    pool: SqlitePool,
}

type VoicePackRow = (
    String,         // id
    String,         // user_id
    String,         // name
    Option<String>, // description
    String,         // style
    Option<String>, // base_prompt
    String,         // writing_samples (JSON)
    i64,            // is_default
);

impl SqliteVoicePackRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS voice_packs (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                name TEXT NOT NULL,
                description TEXT,
                style TEXT NOT NULL DEFAULT 'personal',
                base_prompt TEXT,
                writing_samples TEXT NOT NULL DEFAULT '[]',
                is_default INTEGER NOT NULL DEFAULT 0
            )
        "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    fn to_entity(row: VoicePackRow) -> Result<VoicePack> {
        let (id, user_id, name, description, style, base_prompt, samples, is_default) = row;

        Ok(VoicePack {
            id: VoicePackId::from_str(&id).context("Invalid voice pack ID in database")?,
            user_id: UserId::from_str(&user_id).context("Invalid user ID in database")?,
            name,
            description,
            style,
            base_prompt,
            writing_samples: serde_json::from_str(&samples)
                .context("Invalid writing samples JSON in database")?,
            is_default: is_default != 0,
        })
    }
}

#[async_trait]
impl VoicePackRepositoryPort for SqliteVoicePackRepository {
    async fn create(&self, pack: &VoicePack) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO voice_packs (id, user_id, name, description, style, base_prompt, writing_samples, is_default)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
        )
        .bind(pack.id.to_string())
        .bind(pack.user_id.to_string())
        .bind(&pack.name)
        .bind(&pack.description)
        .bind(&pack.style)
        .bind(&pack.base_prompt)
        .bind(serde_json::to_string(&pack.writing_samples)?)
        .bind(pack.is_default as i64)
        .execute(&self.pool)
        .await
        .context("Failed to insert voice pack")?;

        Ok(())
    }

    async fn get(&self, id: VoicePackId) -> Result<Option<VoicePack>> {
        let row: Option<VoicePackRow> = sqlx::query_as(
            "SELECT id, user_id, name, description, style, base_prompt, writing_samples, is_default FROM voice_packs WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch voice pack")?;

        row.map(Self::to_entity).transpose()
    }

    async fn list(&self, user_id: UserId) -> Result<Vec<VoicePack>> {
        let rows: Vec<VoicePackRow> = sqlx::query_as(
            "SELECT id, user_id, name, description, style, base_prompt, writing_samples, is_default FROM voice_packs WHERE user_id = ? ORDER BY name",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .context("Failed to list voice packs")?;

        rows.into_iter().map(Self::to_entity).collect()
    }

    async fn update(&self, pack: &VoicePack) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE voice_packs
            SET name = ?, description = ?, style = ?, base_prompt = ?, writing_samples = ?, is_default = ?
            WHERE id = ?
        "#,
        )
        .bind(&pack.name)
        .bind(&pack.description)
        .bind(&pack.style)
        .bind(&pack.base_prompt)
        .bind(serde_json::to_string(&pack.writing_samples)?)
        .bind(pack.is_default as i64)
        .bind(pack.id.to_string())
        .execute(&self.pool)
        .await
        .context("Failed to update voice pack")?;

        Ok(())
    }

    async fn delete(&self, id: VoicePackId) -> Result<()> {
        sqlx::query("DELETE FROM voice_packs WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .context("Failed to delete voice pack")?;

        Ok(())
    }
}

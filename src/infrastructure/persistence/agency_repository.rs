//! SQLite repository for agency clients and client voice-pack links

use std::str::FromStr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::application::ports::outbound::AgencyClientRepositoryPort;
use crate::domain::entities::{AgencyClient, VoicePack};
use crate::domain::value_objects::{ClientId, UserId, VoicePackId};

pub struct SqliteAgencyRepository {
    pool: SqlitePool,
}

type ClientRow = (String, String, String, Option<String>);

type VoicePackRow = (
    String,
    String,
    String,
    Option<String>,
    String,
    Option<String>,
    String,
    i64,
);

impl SqliteAgencyRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS agency_clients (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                name TEXT NOT NULL,
                notes TEXT
            )
        "#,
        )
        .execute(&pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS client_voice_packs (
                client_id TEXT NOT NULL,
                voice_pack_id TEXT NOT NULL,
                PRIMARY KEY (client_id, voice_pack_id)
            )
        "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    fn to_entity(row: ClientRow) -> Result<AgencyClient> {
        let (id, user_id, name, notes) = row;

        Ok(AgencyClient {
            id: ClientId::from_str(&id).context("Invalid client ID in database")?,
            user_id: UserId::from_str(&user_id).context("Invalid user ID in database")?,
            name,
            notes,
        })
    }

    fn to_voice_pack(row: VoicePackRow) -> Result<VoicePack> {
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
impl AgencyClientRepositoryPort for SqliteAgencyRepository {
    async fn create(&self, client: &AgencyClient) -> Result<()> {
        sqlx::query("INSERT INTO agency_clients (id, user_id, name, notes) VALUES (?, ?, ?, ?)")
            .bind(client.id.to_string())
            .bind(client.user_id.to_string())
            .bind(&client.name)
            .bind(&client.notes)
            .execute(&self.pool)
            .await
            .context("Failed to insert client")?;

        Ok(())
    }

    async fn get(&self, id: ClientId) -> Result<Option<AgencyClient>> {
        let row: Option<ClientRow> =
            sqlx::query_as("SELECT id, user_id, name, notes FROM agency_clients WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await
                .context("Failed to fetch client")?;

        row.map(Self::to_entity).transpose()
    }

    async fn list(&self, user_id: UserId) -> Result<Vec<AgencyClient>> {
        let rows: Vec<ClientRow> = sqlx::query_as(
            "SELECT id, user_id, name, notes FROM agency_clients WHERE user_id = ? ORDER BY name",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .context("Failed to list clients")?;

        rows.into_iter().map(Self::to_entity).collect()
    }

    async fn delete(&self, id: ClientId) -> Result<()> {
        sqlx::query("DELETE FROM client_voice_packs WHERE client_id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .context("Failed to delete client voice-pack links")?;

        sqlx::query("DELETE FROM agency_clients WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .context("Failed to delete client")?;

        Ok(())
    }

    async fn link_voice_pack(&self, client_id: ClientId, pack_id: VoicePackId) -> Result<()> {
        sqlx::query(
            "INSERT OR IGNORE INTO client_voice_packs (client_id, voice_pack_id) VALUES (?, ?)",
        )
        .bind(client_id.to_string())
        .bind(pack_id.to_string())
        .execute(&self.pool)
        .await
        .context("Failed to link voice pack")?;

        Ok(())
    }

    async fn unlink_voice_pack(&self, client_id: ClientId, pack_id: VoicePackId) -> Result<()> {
        sqlx::query(
            "DELETE FROM client_voice_packs WHERE client_id = ? AND voice_pack_id = ?",
        )
        .bind(client_id.to_string())
        .bind(pack_id.to_string())
        .execute(&self.pool)
        .await
        .context("Failed to unlink voice pack")?;

        Ok(())
    }

    async fn list_voice_packs(&self, client_id: ClientId) -> Result<Vec<VoicePack>> {
        let rows: Vec<VoicePackRow> = sqlx::query_as(
            r#"
            SELECT v.id, v.user_id, v.name, v.description, v.style, v.base_prompt, v.writing_samples, v.is_default
            FROM voice_packs v
            JOIN client_voice_packs l ON l.voice_pack_id = v.id
            WHERE l.client_id = ?
            ORDER BY v.name
        "#,
        )
        .bind(client_id.to_string())
        .fetch_all(&self.pool)
        .await
        .context("Failed to list client voice packs")?;

        rows.into_iter().map(Self::to_voice_pack).collect()
    }
}

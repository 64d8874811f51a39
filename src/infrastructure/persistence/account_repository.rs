//! SQLite repository for connected social accounts

use std::str::FromStr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::application::ports::outbound::AccountRepositoryPort;
use crate::domain::entities::ConnectedAccount;
use crate::domain::value_objects::{AccountId, UserId};

pub struct SqliteAccountRepository {
    pool: SqlitePool,
}

type AccountRow = (String, String, String, String, DateTime<Utc>);

impl SqliteAccountRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS connected_accounts (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                platform TEXT NOT NULL,
                handle TEXT NOT NULL,
                connected_at TIMESTAMP NOT NULL
            )
        "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    fn to_entity(row: AccountRow) -> Result<ConnectedAccount> {
        let (id, user_id, platform, handle, connected_at) = row;

        Ok(ConnectedAccount {
            id: AccountId::from_str(&id).context("Invalid account ID in database")?,
            user_id: UserId::from_str(&user_id).context("Invalid user ID in database")?,
            platform,
            handle,
            connected_at,
        })
    }
}

#[async_trait]
impl AccountRepositoryPort for SqliteAccountRepository {
    async fn create(&self, account: &ConnectedAccount) -> Result<()> {
        sqlx::query(
            "INSERT INTO connected_accounts (id, user_id, platform, handle, connected_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(account.id.to_string())
        .bind(account.user_id.to_string())
        .bind(&account.platform)
        .bind(&account.handle)
        .bind(account.connected_at)
        .execute(&self.pool)
        .await
        .context("Failed to insert connected account")?;

        Ok(())
    }

    async fn list(&self, user_id: UserId) -> Result<Vec<ConnectedAccount>> {
        let rows: Vec<AccountRow> = sqlx::query_as(
            "SELECT id, user_id, platform, handle, connected_at FROM connected_accounts WHERE user_id = ? ORDER BY connected_at",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .context("Failed to list connected accounts")?;

        rows.into_iter().map(Self::to_entity).collect()
    }

    async fn delete(&self, id: AccountId) -> Result<()> {
        sqlx::query("DELETE FROM connected_accounts WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .context("Failed to delete connected account")?;

        Ok(())
    }
}

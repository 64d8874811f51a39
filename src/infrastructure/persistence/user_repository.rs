//! SQLite repository for users

use std::str::FromStr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::application::ports::outbound::UserRepositoryPort;
use crate::domain::entities::User;
use crate::domain::value_objects::UserId;

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

type UserRow = (
    String,         // id
    String,         // email
    Option<String>, // first_name
    Option<String>, // last_name
    Option<String>, // profile_image_url
    String,         // subscription_tier
);

impl SqliteUserRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                email TEXT NOT NULL UNIQUE,
                first_name TEXT,
                last_name TEXT,
                profile_image_url TEXT,
                subscription_tier TEXT NOT NULL DEFAULT 'free'
            )
        "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    fn to_entity(row: UserRow) -> Result<User> {
        let (id, email, first_name, last_name, profile_image_url, subscription_tier) = row;

        Ok(User {
            id: UserId::from_str(&id).context("Invalid user ID in database")?,
            email,
            first_name,
            last_name,
            profile_image_url,
            subscription_tier,
        })
    }
}

#[async_trait]
impl UserRepositoryPort for SqliteUserRepository {
    async fn get(&self, id: UserId) -> Result<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, email, first_name, last_name, profile_image_url, subscription_tier FROM users WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user")?;

        row.map(Self::to_entity).transpose()
    }

    async fn upsert(&self, user: &User) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, first_name, last_name, profile_image_url, subscription_tier)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                email = excluded.email,
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                profile_image_url = excluded.profile_image_url
        "#,
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.profile_image_url)
        .bind(&user.subscription_tier)
        .execute(&self.pool)
        .await
        .context("Failed to upsert user")?;

        Ok(())
    }
}

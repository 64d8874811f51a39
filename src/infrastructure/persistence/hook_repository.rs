//! SQLite repository for hook templates

use std::str::FromStr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::application::ports::outbound::HookRepositoryPort;
use crate::domain::entities::Hook;
use crate::domain::value_objects::{HookId, HookType};

pub struct SqliteHookRepository {
    pool: SqlitePool,
}

type HookRow = (String, String, String, i64);

/// Starter templates seeded on first boot
const DEFAULT_HOOKS: &[(HookType, &str)] = &[
    (HookType::Negative, "Stop {doing X} if you want {outcome}."),
    (HookType::Numbers, "{N} lessons from {experience} that took me years to learn:"),
    (HookType::Story, "In {year}, {low point}. Here's what changed everything:"),
    (HookType::Contrarian, "Unpopular opinion: {common belief} is wrong."),
    (HookType::List, "Everything I know about {topic}, in one thread:"),
];

impl SqliteHookRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS hooks (
                id TEXT PRIMARY KEY,
                category TEXT NOT NULL,
                template_text TEXT NOT NULL,
                is_premium INTEGER NOT NULL DEFAULT 0
            )
        "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    /// Insert the starter templates when the table is empty
    pub async fn seed_defaults(&self) -> Result<()> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM hooks")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count hooks")?;

        if count > 0 {
            return Ok(());
        }

        for (category, template) in DEFAULT_HOOKS {
            self.create(&Hook::new(*category, *template)).await?;
        }

        Ok(())
    }

    fn to_entity(row: HookRow) -> Result<Hook> {
        let (id, category, template_text, is_premium) = row;

        Ok(Hook {
            id: HookId::from_str(&id).context("Invalid hook ID in database")?,
            category: HookType::parse_or_default(&category),
            template_text,
            is_premium: is_premium != 0,
        })
    }
}

#[async_trait]
impl HookRepositoryPort for SqliteHookRepository {
    async fn create(&self, hook: &Hook) -> Result<()> {
        sqlx::query(
            "INSERT INTO hooks (id, category, template_text, is_premium) VALUES (?, ?, ?, ?)",
        )
        .bind(hook.id.to_string())
        .bind(hook.category.as_str())
        .bind(&hook.template_text)
        .bind(hook.is_premium as i64)
        .execute(&self.pool)
        .await
        .context("Failed to insert hook")?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Hook>> {
        let rows: Vec<HookRow> =
            sqlx::query_as("SELECT id, category, template_text, is_premium FROM hooks")
                .fetch_all(&self.pool)
                .await
                .context("Failed to list hooks")?;

        rows.into_iter().map(Self::to_entity).collect()
    }

    async fn list_by_category(&self, category: HookType) -> Result<Vec<Hook>> {
        let rows: Vec<HookRow> = sqlx::query_as(
            "SELECT id, category, template_text, is_premium FROM hooks WHERE category = ?",
        )
        .bind(category.as_str())
        .fetch_all(&self.pool)
        .await
        .context("Failed to list hooks by category")?;

        rows.into_iter().map(Self::to_entity).collect()
    }
}

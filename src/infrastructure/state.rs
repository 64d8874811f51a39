//! Shared application state

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;
use uuid::Uuid;

use crate::application::ports::outbound::{HookRepositoryPort, UserRepositoryPort};
use crate::application::services::{
    AccountService, AgencyService, AnalyticsService, GenerationService, ThreadService,
    VoicePackService,
};
use crate::domain::entities::User;
use crate::domain::value_objects::UserId;
use crate::infrastructure::anthropic::AnthropicClient;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::{
    SqliteAccountRepository, SqliteAgencyRepository, SqliteAnalyticsRepository,
    SqliteHookRepository, SqliteThreadRepository, SqliteUserRepository, SqliteVoicePackRepository,
};

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    /// Fixed account all requests act as until auth lands
    pub demo_user_id: UserId,
    pub generation_service: GenerationService<AnthropicClient>,
    pub voice_pack_service: VoicePackService,
    pub thread_service: ThreadService,
    pub analytics_service: AnalyticsService,
    pub account_service: AccountService,
    pub agency_service: AgencyService,
    pub hook_repository: Arc<dyn HookRepositoryPort>,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&config.database_url)
            .await
            .context("Failed to open SQLite database")?;

        // Repositories create their own tables on construction
        let users = SqliteUserRepository::new(pool.clone()).await?;
        let voice_packs = Arc::new(SqliteVoicePackRepository::new(pool.clone()).await?);
        let threads = Arc::new(SqliteThreadRepository::new(pool.clone()).await?);
        let analytics = Arc::new(SqliteAnalyticsRepository::new(pool.clone()).await?);
        let hooks = Arc::new(SqliteHookRepository::new(pool.clone()).await?);
        let accounts = Arc::new(SqliteAccountRepository::new(pool.clone()).await?);
        let agency = Arc::new(SqliteAgencyRepository::new(pool.clone()).await?);

        hooks.seed_defaults().await?;

        let demo_user_id = Self::ensure_demo_user(&users).await?;

        let llm_client = AnthropicClient::new(
            &config.anthropic_base_url,
            &config.anthropic_api_key,
            &config.anthropic_model,
        );

        let generation_service = GenerationService::new(
            llm_client,
            voice_packs.clone(),
            threads.clone(),
            analytics.clone(),
        );
        let voice_pack_service = VoicePackService::new(voice_packs.clone());
        let thread_service = ThreadService::new(threads.clone());
        let analytics_service = AnalyticsService::new(analytics, threads);
        let account_service = AccountService::new(accounts);
        let agency_service = AgencyService::new(agency, voice_packs);

        Ok(Self {
            config,
            demo_user_id,
            generation_service,
            voice_pack_service,
            thread_service,
            analytics_service,
            account_service,
            agency_service,
            hook_repository: hooks,
        })
    }

    /// Create the demo account on first boot
    async fn ensure_demo_user(users: &SqliteUserRepository) -> Result<UserId> {
        let demo_user_id = UserId::from_uuid(Uuid::nil());

        if users.get(demo_user_id).await?.is_none() {
            let mut user = User::new("demo@twin.local");
            user.id = demo_user_id;
            users.upsert(&user).await?;
        }

        Ok(demo_user_id)
    }
}

//! Account Service - Connected social account management

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::application::ports::outbound::AccountRepositoryPort;
use crate::domain::entities::ConnectedAccount;
use crate::domain::value_objects::{AccountId, UserId};

/// Service for linked-account use cases
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryPort>,
}

impl AccountService {
    pub fn new(repository: Arc<dyn AccountRepositoryPort>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self), fields(platform = %platform))]
    pub async fn connect(
        &self,
        user_id: UserId,
        platform: String,
        handle: String,
    ) -> Result<ConnectedAccount> {
        if platform.trim().is_empty() || handle.trim().is_empty() {
            anyhow::bail!("Platform and handle are required");
        }

        let account = ConnectedAccount::new(user_id, platform, handle);

        self.repository
            .create(&account)
            .await
            .context("Failed to link account")?;

        info!(account_id = %account.id, "Linked {} account @{}", account.platform, account.handle);
        Ok(account)
    }

    #[instrument(skip(self))]
    pub async fn list(&self, user_id: UserId) -> Result<Vec<ConnectedAccount>> {
        self.repository
            .list(user_id)
            .await
            .context("Failed to list linked accounts")
    }

    #[instrument(skip(self))]
    pub async fn disconnect(&self, id: AccountId) -> Result<()> {
        self.repository
            .delete(id)
            .await
            .context("Failed to unlink account")?;

        info!(account_id = %id, "Unlinked account");
        Ok(())
    }
}

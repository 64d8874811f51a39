//! Repository ports - Interfaces for data persistence
//!
//! These traits define the contracts that infrastructure repositories must
//! implement. Application services depend on these traits, not concrete
//! implementations.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::{
    AgencyClient, ConnectedAccount, Hook, Thread, ThreadAnalytics, User, VoicePack,
};
use crate::domain::value_objects::{
    AccountId, AnalyticsSummary, ClientId, HookType, ThreadId, UserId, VoicePackId,
};

// =============================================================================
// User Repository Port
// =============================================================================

/// Repository port for User operations
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// Get a user by ID
    async fn get(&self, id: UserId) -> Result<Option<User>>;

    /// Create a user, or update the mutable fields when the ID exists
    async fn upsert(&self, user: &User) -> Result<()>;
}

// =============================================================================
// Voice Pack Repository Port
// =============================================================================

/// Repository port for VoicePack operations
#[async_trait]
pub trait VoicePackRepositoryPort: Send + Sync {
    /// Create a new voice pack
    async fn create(&self, pack: &VoicePack) -> Result<()>;

    /// Get a voice pack by ID
    async fn get(&self, id: VoicePackId) -> Result<Option<VoicePack>>;

    /// List all voice packs for a user
    async fn list(&self, user_id: UserId) -> Result<Vec<VoicePack>>;

    /// Update a voice pack
    async fn update(&self, pack: &VoicePack) -> Result<()>;

    /// Delete a voice pack
    async fn delete(&self, id: VoicePackId) -> Result<()>;
}

// =============================================================================
// Thread Repository Port
// =============================================================================

/// Repository port for Thread operations
#[async_trait]
pub trait ThreadRepositoryPort: Send + Sync {
    /// Create a new thread
    async fn create(&self, thread: &Thread) -> Result<()>;

    /// Get a thread by ID
    async fn get(&self, id: ThreadId) -> Result<Option<Thread>>;

    /// List all threads for a user, newest first
    async fn list(&self, user_id: UserId) -> Result<Vec<Thread>>;

    /// Update a thread
    async fn update(&self, thread: &Thread) -> Result<()>;

    /// Delete a thread
    async fn delete(&self, id: ThreadId) -> Result<()>;

    /// Topics of the user's most recent threads, newest first
    async fn list_recent_topics(&self, user_id: UserId, limit: u32) -> Result<Vec<String>>;

    /// Number of threads the user has created
    async fn count(&self, user_id: UserId) -> Result<u64>;
}

// =============================================================================
// Analytics Repository Port
// =============================================================================

/// Repository port for ThreadAnalytics operations
#[async_trait]
pub trait AnalyticsRepositoryPort: Send + Sync {
    /// Record an analytics row
    async fn create(&self, analytics: &ThreadAnalytics) -> Result<()>;

    /// List analytics rows across all of a user's threads
    async fn list(&self, user_id: UserId) -> Result<Vec<ThreadAnalytics>>;

    /// Aggregate totals and engagement rate for a user
    async fn summary(&self, user_id: UserId) -> Result<AnalyticsSummary>;
}

// =============================================================================
// Hook Repository Port
// =============================================================================

/// Repository port for Hook template operations
#[async_trait]
pub trait HookRepositoryPort: Send + Sync {
    /// Create a hook template
    async fn create(&self, hook: &Hook) -> Result<()>;

    /// List all hook templates
    async fn list(&self) -> Result<Vec<Hook>>;

    /// List hook templates in a category
    async fn list_by_category(&self, category: HookType) -> Result<Vec<Hook>>;
}

// =============================================================================
// Connected Account Repository Port
// =============================================================================

/// Repository port for ConnectedAccount operations
#[async_trait]
pub trait AccountRepositoryPort: Send + Sync {
    /// Link an account
    async fn create(&self, account: &ConnectedAccount) -> Result<()>;

    /// List a user's linked accounts
    async fn list(&self, user_id: UserId) -> Result<Vec<ConnectedAccount>>;

    /// Unlink an account
    async fn delete(&self, id: AccountId) -> Result<()>;
}

// =============================================================================
// Agency Client Repository Port
// =============================================================================

/// Repository port for AgencyClient operations and voice-pack links
#[async_trait]
pub trait AgencyClientRepositoryPort: Send + Sync {
    /// Create a client
    async fn create(&self, client: &AgencyClient) -> Result<()>;

    /// Get a client by ID
    async fn get(&self, id: ClientId) -> Result<Option<AgencyClient>>;

    /// List an agency user's clients
    async fn list(&self, user_id: UserId) -> Result<Vec<AgencyClient>>;

    /// Delete a client and its voice-pack links
    async fn delete(&self, id: ClientId) -> Result<()>;

    /// Link a voice pack to a client
    async fn link_voice_pack(&self, client_id: ClientId, pack_id: VoicePackId) -> Result<()>;

    /// Remove a voice-pack link
    async fn unlink_voice_pack(&self, client_id: ClientId, pack_id: VoicePackId) -> Result<()>;

    /// Voice packs linked to a client
    async fn list_voice_packs(&self, client_id: ClientId) -> Result<Vec<VoicePack>>;
}

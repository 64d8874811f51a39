//! Value objects - Immutable domain values without identity

mod coaching;
mod hook_type;
mod ids;
mod reply_tone;
mod target_format;
mod thread_status;
mod voice_context;

pub use coaching::{AnalyticsSummary, CoachingStats};
pub use hook_type::HookType;
pub use ids::{AccountId, AnalyticsId, ClientId, HookId, ThreadId, UserId, VoicePackId};
pub use reply_tone::ReplyTone;
pub use target_format::TargetFormat;
pub use thread_status::ThreadStatus;
pub use voice_context::VoiceContext;

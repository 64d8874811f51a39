//! Application services - Use case implementations
//!
//! Services accept port dependencies and return domain entities or result
//! structs; routes translate those into wire DTOs.

pub mod account_service;
pub mod agency_service;
pub mod analytics_service;
pub mod generation_service;
pub mod llm;
pub mod scoring;
pub mod thread_service;
pub mod voice_pack_service;

pub use account_service::AccountService;
pub use agency_service::AgencyService;
pub use analytics_service::{AnalyticsService, RecordAnalyticsRequest};
pub use generation_service::{
    CoachingReport, GenerateThreadRequest, GeneratedThread, GenerationError, GenerationService,
    RemixAnalysis, RemixThreadRequest, RemixedThread, ReplyRequest, ReplySuggestions,
    RepurposeRequest, RepurposedContent,
};
pub use thread_service::{CreateThreadRequest, ThreadService, UpdateThreadRequest};
pub use voice_pack_service::{CreateVoicePackRequest, UpdateVoicePackRequest, VoicePackService};

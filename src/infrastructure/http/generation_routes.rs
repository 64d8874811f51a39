//! Generation API routes - the five LLM-backed content operations

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;

use crate::application::services::{
    CoachingReport, GenerateThreadRequest, GeneratedThread, GenerationError, RemixThreadRequest,
    RemixedThread, ReplyRequest, ReplySuggestions, RepurposeRequest, RepurposedContent,
};
use crate::domain::value_objects::{HookType, ReplyTone, TargetFormat, VoicePackId};
use crate::infrastructure::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateThreadDto {
    pub topic: String,
    #[serde(default)]
    pub hook_type: Option<String>,
    #[serde(default)]
    pub voice_pack_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemixThreadDto {
    pub original_thread: String,
    pub new_topic: String,
    #[serde(default)]
    pub voice_pack_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepurposeDto {
    pub content: Vec<String>,
    pub target_format: String,
    #[serde(default)]
    pub voice_pack_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRepliesDto {
    pub tweet: String,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub voice_pack_id: Option<String>,
}

/// Generate a fresh thread
pub async fn generate_thread(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateThreadDto>,
) -> Result<Json<GeneratedThread>, (StatusCode, String)> {
    let request = GenerateThreadRequest {
        topic: req.topic,
        hook_type: parse_hook_type(req.hook_type.as_deref()),
        voice_pack_id: parse_voice_pack_id(req.voice_pack_id.as_deref())?,
    };

    let result = state
        .generation_service
        .generate_thread(request)
        .await
        .map_err(|e| map_generation_error("Failed to generate thread", e))?;

    Ok(Json(result))
}

/// Remix a viral thread onto a new topic
pub async fn remix_thread(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RemixThreadDto>,
) -> Result<Json<RemixedThread>, (StatusCode, String)> {
    let request = RemixThreadRequest {
        original_thread: req.original_thread,
        new_topic: req.new_topic,
        voice_pack_id: parse_voice_pack_id(req.voice_pack_id.as_deref())?,
    };

    let result = state
        .generation_service
        .remix_thread(request)
        .await
        .map_err(|e| map_generation_error("Failed to remix thread", e))?;

    Ok(Json(result))
}

/// Repurpose thread content into another format
pub async fn repurpose_thread(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RepurposeDto>,
) -> Result<Json<RepurposedContent>, (StatusCode, String)> {
    let target_format = TargetFormat::parse(&req.target_format).ok_or((
        StatusCode::BAD_REQUEST,
        format!("Invalid target format: {}", req.target_format),
    ))?;

    let request = RepurposeRequest {
        content: req.content,
        target_format,
        voice_pack_id: parse_voice_pack_id(req.voice_pack_id.as_deref())?,
    };

    let result = state
        .generation_service
        .repurpose_thread(request)
        .await
        .map_err(|e| map_generation_error("Failed to repurpose thread", e))?;

    Ok(Json(result))
}

/// Suggest replies to a pasted tweet
pub async fn suggest_replies(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SuggestRepliesDto>,
) -> Result<Json<ReplySuggestions>, (StatusCode, String)> {
    let request = ReplyRequest {
        tweet: req.tweet,
        tone: req
            .tone
            .as_deref()
            .map(ReplyTone::parse_or_default)
            .unwrap_or_default(),
        voice_pack_id: parse_voice_pack_id(req.voice_pack_id.as_deref())?,
    };

    let result = state
        .generation_service
        .suggest_replies(request)
        .await
        .map_err(|e| map_generation_error("Failed to suggest replies", e))?;

    Ok(Json(result))
}

/// Coaching tips from aggregate usage stats
pub async fn coaching_tips(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CoachingReport>, (StatusCode, String)> {
    let report = state
        .generation_service
        .coaching_tips(state.demo_user_id)
        .await
        .map_err(|e| map_generation_error("Failed to generate coaching tips", e))?;

    Ok(Json(report))
}

/// Unrecognized hook tags fall back to the default rather than erroring
fn parse_hook_type(tag: Option<&str>) -> HookType {
    tag.map(HookType::parse_or_default).unwrap_or_default()
}

fn parse_voice_pack_id(id: Option<&str>) -> Result<Option<VoicePackId>, (StatusCode, String)> {
    id.map(|raw| {
        VoicePackId::from_str(raw)
            .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid voice pack ID".to_string()))
    })
    .transpose()
}

/// Input errors are the caller's fault; everything else surfaces as one
/// operation-level failure message with the underlying cause
fn map_generation_error(operation: &str, error: GenerationError) -> (StatusCode, String) {
    match error {
        GenerationError::Input(message) => (StatusCode::BAD_REQUEST, message),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("{}: {}", operation, other),
        ),
    }
}

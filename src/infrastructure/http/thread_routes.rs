//! Thread API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

use crate::application::services::{CreateThreadRequest, UpdateThreadRequest};
use crate::domain::entities::Thread;
use crate::domain::value_objects::{HookType, ThreadId, ThreadStatus, VoicePackId};
use crate::infrastructure::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateThreadDto {
    pub topic: String,
    #[serde(default)]
    pub hook_type: Option<String>,
    pub content: Vec<String>,
    #[serde(default)]
    pub cringe_score: u32,
    #[serde(default)]
    pub voice_pack_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateThreadDto {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub content: Option<Vec<String>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub scheduled_for: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadResponse {
    pub id: String,
    pub voice_pack_id: Option<String>,
    pub topic: String,
    pub hook_type: HookType,
    pub status: ThreadStatus,
    pub content: Vec<String>,
    pub cringe_score: Option<u32>,
    pub scheduled_for: Option<String>,
    pub posted_at: Option<String>,
    pub created_at: String,
}

impl From<Thread> for ThreadResponse {
    fn from(thread: Thread) -> Self {
        Self {
            id: thread.id.to_string(),
            voice_pack_id: thread.voice_pack_id.map(|v| v.to_string()),
            topic: thread.topic,
            hook_type: thread.hook_type,
            status: thread.status,
            content: thread.content,
            cringe_score: thread.cringe_score,
            scheduled_for: thread.scheduled_for.map(|t| t.to_rfc3339()),
            posted_at: thread.posted_at.map(|t| t.to_rfc3339()),
            created_at: thread.created_at.to_rfc3339(),
        }
    }
}

/// List the user's threads, newest first
pub async fn list_threads(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ThreadResponse>>, (StatusCode, String)> {
    let threads = state
        .thread_service
        .list(state.demo_user_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(threads.into_iter().map(ThreadResponse::from).collect()))
}

/// Save a thread (typically a generated draft)
pub async fn create_thread(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateThreadDto>,
) -> Result<(StatusCode, Json<ThreadResponse>), (StatusCode, String)> {
    let status = req
        .status
        .as_deref()
        .map(|s| {
            ThreadStatus::parse(s)
                .ok_or((StatusCode::BAD_REQUEST, format!("Invalid status: {}", s)))
        })
        .transpose()?;

    let request = CreateThreadRequest {
        topic: req.topic,
        hook_type: req
            .hook_type
            .as_deref()
            .map(HookType::parse_or_default)
            .unwrap_or_default(),
        content: req.content,
        cringe_score: req.cringe_score,
        voice_pack_id: req
            .voice_pack_id
            .as_deref()
            .map(|raw| {
                VoicePackId::from_str(raw).map_err(|_| {
                    (StatusCode::BAD_REQUEST, "Invalid voice pack ID".to_string())
                })
            })
            .transpose()?,
        status,
    };

    let thread = state
        .thread_service
        .create(state.demo_user_id, request)
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    Ok((StatusCode::CREATED, Json(ThreadResponse::from(thread))))
}

/// Get a thread by ID
pub async fn get_thread(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ThreadResponse>, (StatusCode, String)> {
    let thread_id = parse_id(&id)?;

    let thread = state
        .thread_service
        .get(thread_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or((StatusCode::NOT_FOUND, "Thread not found".to_string()))?;

    Ok(Json(ThreadResponse::from(thread)))
}

/// Patch a thread (edits, scheduling, status transitions)
pub async fn update_thread(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateThreadDto>,
) -> Result<Json<ThreadResponse>, (StatusCode, String)> {
    let thread_id = parse_id(&id)?;

    if state
        .thread_service
        .get(thread_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .is_none()
    {
        return Err((StatusCode::NOT_FOUND, "Thread not found".to_string()));
    }

    let status = req
        .status
        .as_deref()
        .map(|s| {
            ThreadStatus::parse(s)
                .ok_or((StatusCode::BAD_REQUEST, format!("Invalid status: {}", s)))
        })
        .transpose()?;

    let request = UpdateThreadRequest {
        topic: req.topic,
        content: req.content,
        status,
        scheduled_for: req.scheduled_for,
    };

    let thread = state
        .thread_service
        .update(thread_id, request)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(ThreadResponse::from(thread)))
}

/// Delete a thread
pub async fn delete_thread(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let thread_id = parse_id(&id)?;

    state
        .thread_service
        .delete(thread_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(id: &str) -> Result<ThreadId, (StatusCode, String)> {
    ThreadId::from_str(id).map_err(|_| (StatusCode::BAD_REQUEST, "Invalid thread ID".to_string()))
}

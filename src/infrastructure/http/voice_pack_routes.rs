//! Voice pack API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

use crate::application::services::{CreateVoicePackRequest, UpdateVoicePackRequest};
use crate::domain::entities::VoicePack;
use crate::domain::value_objects::VoicePackId;
use crate::infrastructure::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVoicePackDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub base_prompt: Option<String>,
    #[serde(default)]
    pub writing_samples: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVoicePackDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub base_prompt: Option<String>,
    #[serde(default)]
    pub writing_samples: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoicePackResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub style: String,
    pub writing_samples: Vec<String>,
    pub is_default: bool,
}

impl From<VoicePack> for VoicePackResponse {
    fn from(pack: VoicePack) -> Self {
        Self {
            id: pack.id.to_string(),
            name: pack.name,
            description: pack.description,
            style: pack.style,
            writing_samples: pack.writing_samples,
            is_default: pack.is_default,
        }
    }
}

/// List the user's voice packs
pub async fn list_voice_packs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<VoicePackResponse>>, (StatusCode, String)> {
    let packs = state
        .voice_pack_service
        .list(state.demo_user_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(packs.into_iter().map(VoicePackResponse::from).collect()))
}

/// Create a voice pack
pub async fn create_voice_pack(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateVoicePackDto>,
) -> Result<(StatusCode, Json<VoicePackResponse>), (StatusCode, String)> {
    let request = CreateVoicePackRequest {
        name: req.name,
        description: req.description,
        style: req.style,
        base_prompt: req.base_prompt,
        writing_samples: req.writing_samples,
    };

    let pack = state
        .voice_pack_service
        .create(state.demo_user_id, request)
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    Ok((StatusCode::CREATED, Json(VoicePackResponse::from(pack))))
}

/// Update a voice pack
pub async fn update_voice_pack(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateVoicePackDto>,
) -> Result<Json<VoicePackResponse>, (StatusCode, String)> {
    let pack_id = parse_id(&id)?;

    if state
        .voice_pack_service
        .get(pack_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .is_none()
    {
        return Err((StatusCode::NOT_FOUND, "Voice pack not found".to_string()));
    }

    let request = UpdateVoicePackRequest {
        name: req.name,
        description: req.description,
        style: req.style,
        base_prompt: req.base_prompt,
        writing_samples: req.writing_samples,
    };

    let pack = state
        .voice_pack_service
        .update(pack_id, request)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(VoicePackResponse::from(pack)))
}

/// Delete a voice pack
pub async fn delete_voice_pack(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let pack_id = parse_id(&id)?;

    state
        .voice_pack_service
        .delete(pack_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(id: &str) -> Result<VoicePackId, (StatusCode, String)> {
    VoicePackId::from_str(id)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid voice pack ID".to_string()))
}

//! Agency API routes - clients and their voice-pack links

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::entities::AgencyClient;
use crate::domain::value_objects::{ClientId, VoicePackId};
use crate::infrastructure::http::voice_pack_routes::VoicePackResponse;
use crate::infrastructure::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateClientDto {
    pub name: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkVoicePackDto {
    pub voice_pack_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub id: String,
    pub name: String,
    pub notes: Option<String>,
}

impl From<AgencyClient> for ClientResponse {
    fn from(client: AgencyClient) -> Self {
        Self {
            id: client.id.to_string(),
            name: client.name,
            notes: client.notes,
        }
    }
}

/// List the agency's clients
pub async fn list_clients(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ClientResponse>>, (StatusCode, String)> {
    let clients = state
        .agency_service
        .list_clients(state.demo_user_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(clients.into_iter().map(ClientResponse::from).collect()))
}

/// Create a client
pub async fn create_client(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateClientDto>,
) -> Result<(StatusCode, Json<ClientResponse>), (StatusCode, String)> {
    let client = state
        .agency_service
        .create_client(state.demo_user_id, req.name, req.notes)
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    Ok((StatusCode::CREATED, Json(ClientResponse::from(client))))
}

/// Delete a client
pub async fn delete_client(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let client_id = parse_client_id(&id)?;

    state
        .agency_service
        .delete_client(client_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the voice packs linked to a client
pub async fn list_client_voice_packs(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<VoicePackResponse>>, (StatusCode, String)> {
    let client_id = parse_client_id(&id)?;

    let packs = state
        .agency_service
        .list_voice_packs(client_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(packs.into_iter().map(VoicePackResponse::from).collect()))
}

/// Link a voice pack to a client
pub async fn link_client_voice_pack(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<LinkVoicePackDto>,
) -> Result<StatusCode, (StatusCode, String)> {
    let client_id = parse_client_id(&id)?;
    let pack_id = VoicePackId::from_str(&req.voice_pack_id)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid voice pack ID".to_string()))?;

    state
        .agency_service
        .link_voice_pack(client_id, pack_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a voice-pack link from a client
pub async fn unlink_client_voice_pack(
    State(state): State<Arc<AppState>>,
    Path((id, pack_id)): Path<(String, String)>,
) -> Result<StatusCode, (StatusCode, String)> {
    let client_id = parse_client_id(&id)?;
    let pack_id = VoicePackId::from_str(&pack_id)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid voice pack ID".to_string()))?;

    state
        .agency_service
        .unlink_voice_pack(client_id, pack_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(StatusCode::NO_CONTENT)
}

fn parse_client_id(id: &str) -> Result<ClientId, (StatusCode, String)> {
    ClientId::from_str(id).map_err(|_| (StatusCode::BAD_REQUEST, "Invalid client ID".to_string()))
}

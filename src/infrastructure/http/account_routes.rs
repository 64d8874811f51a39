//! Connected account API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::entities::ConnectedAccount;
use crate::domain::value_objects::AccountId;
use crate::infrastructure::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ConnectAccountDto {
    pub platform: String,
    pub handle: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: String,
    pub platform: String,
    pub handle: String,
    pub connected_at: String,
}

impl From<ConnectedAccount> for AccountResponse {
    fn from(account: ConnectedAccount) -> Self {
        Self {
            id: account.id.to_string(),
            platform: account.platform,
            handle: account.handle,
            connected_at: account.connected_at.to_rfc3339(),
        }
    }
}

/// List linked accounts
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AccountResponse>>, (StatusCode, String)> {
    let accounts = state
        .account_service
        .list(state.demo_user_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(accounts.into_iter().map(AccountResponse::from).collect()))
}

/// Link an account
pub async fn connect_account(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ConnectAccountDto>,
) -> Result<(StatusCode, Json<AccountResponse>), (StatusCode, String)> {
    let account = state
        .account_service
        .connect(state.demo_user_id, req.platform, req.handle)
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    Ok((StatusCode::CREATED, Json(AccountResponse::from(account))))
}

/// Unlink an account
pub async fn disconnect_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let account_id = AccountId::from_str(&id)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid account ID".to_string()))?;

    state
        .account_service
        .disconnect(account_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(StatusCode::NO_CONTENT)
}

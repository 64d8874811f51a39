//! Hook template API routes

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::entities::Hook;
use crate::domain::value_objects::HookType;
use crate::infrastructure::state::AppState;

#[derive(Debug, Deserialize)]
pub struct HookQuery {
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookResponse {
    pub id: String,
    pub category: HookType,
    pub template_text: String,
    pub is_premium: bool,
}

impl From<Hook> for HookResponse {
    fn from(hook: Hook) -> Self {
        Self {
            id: hook.id.to_string(),
            category: hook.category,
            template_text: hook.template_text,
            is_premium: hook.is_premium,
        }
    }
}

/// List hook templates, optionally filtered by category
pub async fn list_hooks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HookQuery>,
) -> Result<Json<Vec<HookResponse>>, (StatusCode, String)> {
    let hooks = match query.category.as_deref() {
        Some(tag) => {
            state
                .hook_repository
                .list_by_category(HookType::parse_or_default(tag))
                .await
        }
        None => state.hook_repository.list().await,
    }
    .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(hooks.into_iter().map(HookResponse::from).collect()))
}

//! Analytics API routes

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

use crate::application::services::RecordAnalyticsRequest;
use crate::domain::entities::ThreadAnalytics;
use crate::domain::value_objects::{AnalyticsSummary, ThreadId};
use crate::infrastructure::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordAnalyticsDto {
    pub thread_id: String,
    #[serde(default)]
    pub impressions: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub replies: u64,
    #[serde(default)]
    pub retweets: u64,
    #[serde(default)]
    pub profile_clicks: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub id: String,
    pub thread_id: String,
    pub impressions: u64,
    pub likes: u64,
    pub replies: u64,
    pub retweets: u64,
    pub profile_clicks: u64,
    pub recorded_at: String,
}

impl From<ThreadAnalytics> for AnalyticsResponse {
    fn from(row: ThreadAnalytics) -> Self {
        Self {
            id: row.id.to_string(),
            thread_id: row.thread_id.to_string(),
            impressions: row.impressions,
            likes: row.likes,
            replies: row.replies,
            retweets: row.retweets,
            profile_clicks: row.profile_clicks,
            recorded_at: row.recorded_at.to_rfc3339(),
        }
    }
}

/// List analytics rows across the user's threads
pub async fn list_analytics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AnalyticsResponse>>, (StatusCode, String)> {
    let rows = state
        .analytics_service
        .list(state.demo_user_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(rows.into_iter().map(AnalyticsResponse::from).collect()))
}

/// Aggregate totals and engagement rate
pub async fn analytics_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AnalyticsSummary>, (StatusCode, String)> {
    let summary = state
        .analytics_service
        .summary(state.demo_user_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(summary))
}

/// Record a performance snapshot for a thread
pub async fn record_analytics(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RecordAnalyticsDto>,
) -> Result<(StatusCode, Json<AnalyticsResponse>), (StatusCode, String)> {
    let thread_id = ThreadId::from_str(&req.thread_id)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid thread ID".to_string()))?;

    let request = RecordAnalyticsRequest {
        thread_id,
        impressions: req.impressions,
        likes: req.likes,
        replies: req.replies,
        retweets: req.retweets,
        profile_clicks: req.profile_clicks,
    };

    let row = state
        .analytics_service
        .record(request)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok((StatusCode::CREATED, Json(AnalyticsResponse::from(row))))
}

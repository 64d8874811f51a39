//! HTTP REST API routes

mod account_routes;
mod agency_routes;
mod analytics_routes;
mod generation_routes;
mod hook_routes;
mod thread_routes;
mod voice_pack_routes;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Generation
        .route(
            "/api/threads/generate",
            post(generation_routes::generate_thread),
        )
        .route("/api/threads/remix", post(generation_routes::remix_thread))
        .route(
            "/api/threads/repurpose",
            post(generation_routes::repurpose_thread),
        )
        .route(
            "/api/replies/suggest",
            post(generation_routes::suggest_replies),
        )
        .route("/api/coaching/tips", get(generation_routes::coaching_tips))
        // Voice packs
        .route("/api/voice-packs", get(voice_pack_routes::list_voice_packs))
        .route(
            "/api/voice-packs",
            post(voice_pack_routes::create_voice_pack),
        )
        .route(
            "/api/voice-packs/{id}",
            put(voice_pack_routes::update_voice_pack),
        )
        .route(
            "/api/voice-packs/{id}",
            delete(voice_pack_routes::delete_voice_pack),
        )
        // Threads
        .route("/api/threads", get(thread_routes::list_threads))
        .route("/api/threads", post(thread_routes::create_thread))
        .route("/api/threads/{id}", get(thread_routes::get_thread))
        .route("/api/threads/{id}", patch(thread_routes::update_thread))
        .route("/api/threads/{id}", delete(thread_routes::delete_thread))
        // Analytics
        .route("/api/analytics", get(analytics_routes::list_analytics))
        .route("/api/analytics", post(analytics_routes::record_analytics))
        .route(
            "/api/analytics/summary",
            get(analytics_routes::analytics_summary),
        )
        // Hooks
        .route("/api/hooks", get(hook_routes::list_hooks))
        // Connected accounts
        .route("/api/accounts", get(account_routes::list_accounts))
        .route("/api/accounts", post(account_routes::connect_account))
        .route(
            "/api/accounts/{id}",
            delete(account_routes::disconnect_account),
        )
        // Agency clients
        .route("/api/clients", get(agency_routes::list_clients))
        .route("/api/clients", post(agency_routes::create_client))
        .route("/api/clients/{id}", delete(agency_routes::delete_client))
        .route(
            "/api/clients/{id}/voice-packs",
            get(agency_routes::list_client_voice_packs),
        )
        .route(
            "/api/clients/{id}/voice-packs",
            post(agency_routes::link_client_voice_pack),
        )
        .route(
            "/api/clients/{id}/voice-packs/{pack_id}",
            delete(agency_routes::unlink_client_voice_pack),
        )
}

//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: SQLite repositories for the content model
//! - HTTP: REST API routes
//! - Anthropic: LLM integration for content generation
//! - Config: Application configuration
//! - State: Shared application state

pub mod anthropic;
pub mod config;
pub mod http;
pub mod persistence;
pub mod state;

pub mod alerts;
pub mod health_data;
pub mod profile;
pub mod questions;
pub mod reminders;

use crate::error::ApiError;
use crate::state::SharedState;
use axum::{routing::get, Json, Router};
use serde_json::json;

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}

pub fn routes(state: SharedState) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .merge(health_data::router(state.clone()))
        .merge(alerts::router(state.clone()))
        .merge(questions::router(state.clone()))
        .merge(profile::router(state.clone()))
        .merge(reminders::router(state));

    Router::new().nest("/api", api)
}

/// Every read and write in this API is scoped to one monitored person;
/// reject requests that do not say which one.
pub(crate) fn require_user_id(user_id: Option<String>) -> Result<String, ApiError> {
    match user_id {
        Some(id) if !id.trim().is_empty() => Ok(id),
        _ => Err(ApiError::Validation("user_id is required".to_string())),
    }
}

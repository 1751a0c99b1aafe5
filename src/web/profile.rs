use crate::db::{self, UserProfileRow};
use crate::domain::thresholds::{ThresholdOverrides, ThresholdSet};
use crate::error::ApiError;
use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route(
            "/user_profile/:user_id",
            get(get_user_profile).put(update_user_profile),
        )
        .with_state(state)
}

#[derive(Deserialize)]
struct ProfileUpdatePayload {
    name: Option<String>,
    user_type: Option<String>,
    monitored_user_id: Option<String>,
    alert_thresholds: Option<serde_json::Value>,
}

async fn get_user_profile(
    State(state): State<SharedState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserProfileRow>, ApiError> {
    let profile = db::get_profile(&state.pool, &user_id)
        .await?
        .ok_or(ApiError::NotFound("user profile"))?;

    Ok(Json(profile))
}

/// Partial profile update. A submitted threshold override set is decoded
/// and checked against the bound invariants before it is stored; metrics
/// it leaves out keep their defaults at resolution time.
async fn update_user_profile(
    State(state): State<SharedState>,
    Path(user_id): Path<String>,
    Json(payload): Json<ProfileUpdatePayload>,
) -> Result<Json<UserProfileRow>, ApiError> {
    let mut profile = db::get_profile(&state.pool, &user_id)
        .await?
        .ok_or(ApiError::NotFound("user profile"))?;

    if let Some(name) = payload.name {
        profile.name = name;
    }
    if let Some(user_type) = payload.user_type {
        profile.user_type = user_type;
    }
    if let Some(monitored_user_id) = payload.monitored_user_id {
        profile.monitored_user_id = Some(monitored_user_id);
    }
    if let Some(thresholds) = payload.alert_thresholds {
        let overrides: ThresholdOverrides =
            serde_json::from_value(thresholds.clone()).map_err(|err| {
                ApiError::Validation(format!("invalid alert_thresholds: {err}"))
            })?;
        ThresholdSet::default()
            .merged(&overrides)
            .validate()
            .map_err(ApiError::Validation)?;
        profile.alert_thresholds = Some(thresholds);
    }

    let updated = db::update_profile(&state.pool, &profile).await?;
    Ok(Json(updated))
}

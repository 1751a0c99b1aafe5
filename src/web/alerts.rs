use crate::db::{self, AlertRow};
use crate::error::ApiError;
use crate::state::SharedState;
use crate::web::require_user_id;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/alerts", get(get_alerts))
        .route("/alerts/create", post(create_alert))
        .route("/alerts/:alert_id", delete(delete_alert))
        .route("/alerts/:alert_id/dismiss", post(dismiss_alert))
        .route("/alerts/:alert_id/acknowledge", post(acknowledge_alert))
        .with_state(state)
}

#[derive(Deserialize)]
struct AlertListParams {
    user_id: Option<String>,
    include_dismissed: Option<bool>,
    limit: Option<i64>,
}

#[derive(Serialize)]
struct AlertPayload {
    id: Uuid,
    user_id: String,
    #[serde(rename = "type")]
    alert_type: String,
    title: String,
    message: String,
    metric: Option<String>,
    value: Option<String>,
    threshold_data: Option<serde_json::Value>,
    is_dismissed: bool,
    is_acknowledged: bool,
    timestamp: DateTime<Utc>,
    dismissed_at: Option<DateTime<Utc>>,
    acknowledged_at: Option<DateTime<Utc>>,
}

impl From<AlertRow> for AlertPayload {
    fn from(row: AlertRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            alert_type: row.alert_type,
            title: row.title,
            message: row.message,
            metric: row.metric,
            value: row.value,
            threshold_data: row.threshold_data,
            is_dismissed: row.is_dismissed,
            is_acknowledged: row.is_acknowledged,
            timestamp: row.created_at,
            dismissed_at: row.dismissed_at,
            acknowledged_at: row.acknowledged_at,
        }
    }
}

#[derive(Serialize)]
struct AlertListResponse {
    alerts: Vec<AlertPayload>,
    count: usize,
}

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

#[derive(Deserialize)]
struct CreateAlertPayload {
    user_id: Option<String>,
    alert_type: Option<String>,
    title: Option<String>,
    message: Option<String>,
    metric: Option<String>,
    value: Option<String>,
}

#[derive(Serialize)]
struct CreateAlertResponse {
    message: &'static str,
    alert: AlertPayload,
}

async fn get_alerts(
    State(state): State<SharedState>,
    Query(params): Query<AlertListParams>,
) -> Result<Json<AlertListResponse>, ApiError> {
    let user_id = require_user_id(params.user_id)?;
    let include_dismissed = params.include_dismissed.unwrap_or(false);
    let limit = params.limit.unwrap_or(20);

    let rows = db::list_alerts(&state.pool, &user_id, include_dismissed, limit).await?;
    let alerts: Vec<AlertPayload> = rows.into_iter().map(AlertPayload::from).collect();

    Ok(Json(AlertListResponse {
        count: alerts.len(),
        alerts,
    }))
}

async fn dismiss_alert(
    State(state): State<SharedState>,
    Path(alert_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    db::dismiss_alert(&state.pool, alert_id)
        .await?
        .ok_or(ApiError::NotFound("alert"))?;

    Ok(Json(MessageResponse {
        message: "Alert dismissed successfully",
    }))
}

async fn acknowledge_alert(
    State(state): State<SharedState>,
    Path(alert_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    db::acknowledge_alert(&state.pool, alert_id)
        .await?
        .ok_or(ApiError::NotFound("alert"))?;

    Ok(Json(MessageResponse {
        message: "Alert acknowledged successfully",
    }))
}

async fn delete_alert(
    State(state): State<SharedState>,
    Path(alert_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !db::delete_alert(&state.pool, alert_id).await? {
        return Err(ApiError::NotFound("alert"));
    }

    Ok(Json(MessageResponse {
        message: "Alert deleted successfully",
    }))
}

/// Caregiver-authored alert, bypassing the evaluators. Only field presence
/// is validated; type, title and message are stored as given.
async fn create_alert(
    State(state): State<SharedState>,
    Json(payload): Json<CreateAlertPayload>,
) -> Result<(StatusCode, Json<CreateAlertResponse>), ApiError> {
    let (Some(user_id), Some(alert_type), Some(title), Some(message)) = (
        payload.user_id.filter(|v| !v.trim().is_empty()),
        payload.alert_type.filter(|v| !v.trim().is_empty()),
        payload.title.filter(|v| !v.trim().is_empty()),
        payload.message.filter(|v| !v.trim().is_empty()),
    ) else {
        return Err(ApiError::Validation(
            "user_id, alert_type, title, and message are required".to_string(),
        ));
    };

    let row = db::create_manual_alert(
        &state.pool,
        &user_id,
        &alert_type,
        &title,
        &message,
        payload.metric.as_deref(),
        payload.value.as_deref(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateAlertResponse {
            message: "Alert created successfully",
            alert: row.into(),
        }),
    ))
}

use crate::db::{self, NewReminder, ReminderRow};
use crate::error::ApiError;
use crate::state::SharedState;
use crate::web::require_user_id;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/reminders", get(get_reminders).post(create_reminder))
        .route("/reminders/seed", post(seed_reminders))
        .route(
            "/reminders/:reminder_id",
            put(update_reminder).delete(delete_reminder),
        )
        .route("/reminders/:reminder_id/complete", put(complete_reminder))
        .with_state(state)
}

#[derive(Deserialize)]
struct ReminderListParams {
    user_id: Option<String>,
    status: Option<String>,
    #[serde(rename = "type")]
    reminder_type: Option<String>,
    today_only: Option<bool>,
}

#[derive(Serialize)]
struct ReminderListResponse {
    reminders: Vec<ReminderRow>,
}

#[derive(Deserialize)]
struct CreateReminderPayload {
    user_id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    priority: Option<String>,
    reminder_type: Option<String>,
    start_date: Option<NaiveDate>,
    created_by: Option<String>,
}

#[derive(Deserialize)]
struct UpdateReminderPayload {
    title: Option<String>,
    description: Option<String>,
    priority: Option<String>,
    reminder_type: Option<String>,
    start_date: Option<NaiveDate>,
}

#[derive(Serialize)]
struct ReminderResponse {
    message: &'static str,
    reminder: ReminderRow,
}

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

async fn get_reminders(
    State(state): State<SharedState>,
    Query(params): Query<ReminderListParams>,
) -> Result<Json<ReminderListResponse>, ApiError> {
    let user_id = require_user_id(params.user_id)?;
    let status = params.status.unwrap_or_else(|| "all".to_string());
    let today_only = params.today_only.unwrap_or(false);
    let today = Utc::now().date_naive();

    let reminders = if today_only {
        db::list_reminders_for_today(&state.pool, &user_id, today).await?
    } else if params.reminder_type.as_deref() == Some("daily") {
        db::list_daily_reminders(&state.pool, &user_id).await?
    } else if params.reminder_type.as_deref() == Some("event") && status == "active" {
        db::list_active_event_reminders(&state.pool, &user_id).await?
    } else if status == "active" {
        db::list_active_reminders(&state.pool, &user_id).await?
    } else if status == "completed" {
        db::list_completed_reminders(&state.pool, &user_id, 14).await?
    } else {
        db::list_all_reminders(&state.pool, &user_id).await?
    };

    Ok(Json(ReminderListResponse { reminders }))
}

async fn create_reminder(
    State(state): State<SharedState>,
    Json(payload): Json<CreateReminderPayload>,
) -> Result<(StatusCode, Json<ReminderResponse>), ApiError> {
    let user_id = require_user_id(payload.user_id)?;
    let Some(title) = payload.title.filter(|t| !t.trim().is_empty()) else {
        return Err(ApiError::Validation("title is required".to_string()));
    };

    let reminder_type = payload.reminder_type.unwrap_or_else(|| "event".to_string());
    // Daily reminders start appearing immediately unless told otherwise.
    let start_date = match payload.start_date {
        Some(date) => Some(date),
        None if reminder_type == "daily" => Some(Utc::now().date_naive()),
        None => None,
    };

    let reminder = NewReminder {
        user_id,
        title,
        description: payload.description,
        priority: payload.priority.unwrap_or_else(|| "medium".to_string()),
        reminder_type,
        start_date,
        created_by: payload.created_by,
    };

    let row = db::insert_reminder(&state.pool, &reminder).await?;

    Ok((
        StatusCode::CREATED,
        Json(ReminderResponse {
            message: "Reminder created successfully",
            reminder: row,
        }),
    ))
}

async fn complete_reminder(
    State(state): State<SharedState>,
    Path(reminder_id): Path<Uuid>,
) -> Result<Json<ReminderResponse>, ApiError> {
    let today = Utc::now().date_naive();
    let reminder = db::complete_reminder(&state.pool, reminder_id, today)
        .await?
        .ok_or(ApiError::NotFound("reminder"))?;

    Ok(Json(ReminderResponse {
        message: "Reminder marked as completed",
        reminder,
    }))
}

async fn update_reminder(
    State(state): State<SharedState>,
    Path(reminder_id): Path<Uuid>,
    Json(payload): Json<UpdateReminderPayload>,
) -> Result<Json<ReminderResponse>, ApiError> {
    let mut reminder = db::get_reminder(&state.pool, reminder_id)
        .await?
        .ok_or(ApiError::NotFound("reminder"))?;

    if let Some(title) = payload.title {
        reminder.title = title;
    }
    if let Some(description) = payload.description {
        reminder.description = Some(description);
    }
    if let Some(priority) = payload.priority {
        reminder.priority = priority;
    }
    if let Some(reminder_type) = payload.reminder_type {
        reminder.reminder_type = reminder_type;
    }
    if let Some(start_date) = payload.start_date {
        reminder.start_date = Some(start_date);
    }

    let row = db::update_reminder(&state.pool, &reminder).await?;

    Ok(Json(ReminderResponse {
        message: "Reminder updated successfully",
        reminder: row,
    }))
}

async fn delete_reminder(
    State(state): State<SharedState>,
    Path(reminder_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !db::delete_reminder(&state.pool, reminder_id).await? {
        return Err(ApiError::NotFound("reminder"));
    }

    Ok(Json(MessageResponse {
        message: "Reminder deleted successfully".to_string(),
    }))
}

#[derive(Deserialize)]
struct SeedPayload {
    user_id: Option<String>,
}

/// Insert a handful of sample reminders for demonstrations.
async fn seed_reminders(
    State(state): State<SharedState>,
    Json(payload): Json<SeedPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user_id = payload.user_id.unwrap_or_else(|| "2".to_string());

    let samples = [
        (
            "Take Morning Medication",
            "Take blood pressure medication with breakfast",
            "high",
        ),
        (
            "Doctor Appointment Reminder",
            "Cardiology appointment tomorrow at 2:00 PM",
            "high",
        ),
        (
            "Weekly Exercise",
            "Go for a 30-minute walk in the neighborhood",
            "medium",
        ),
        ("Call Family", "Weekly check-in call with grandchildren", "low"),
        (
            "Grocery Shopping",
            "Pick up fresh fruits and vegetables",
            "medium",
        ),
    ];

    for (title, description, priority) in samples {
        let reminder = NewReminder {
            user_id: user_id.clone(),
            title: title.to_string(),
            description: Some(description.to_string()),
            priority: priority.to_string(),
            reminder_type: "event".to_string(),
            start_date: None,
            created_by: Some("1".to_string()),
        };
        db::insert_reminder(&state.pool, &reminder).await?;
    }

    Ok(Json(MessageResponse {
        message: format!("Created {} sample reminders", samples.len()),
    }))
}

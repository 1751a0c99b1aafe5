use crate::db::{self, HealthSampleRow, NewHealthSample};
use crate::domain::simulation;
use crate::domain::vitals::{self, SampleVitals};
use crate::error::ApiError;
use crate::state::SharedState;
use crate::web::require_user_id;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/health/data", get(get_health_data).post(add_health_data))
        .route("/health/simulate", post(simulate_health_data))
        .route("/status", get(overall_status))
        .with_state(state)
}

#[derive(Deserialize)]
struct UserScopedParams {
    user_id: Option<String>,
    days: Option<i64>,
}

#[derive(Deserialize)]
struct NewSamplePayload {
    user_id: Option<String>,
    timestamp: Option<DateTime<Utc>>,
    heart_rate: Option<i32>,
    blood_pressure_systolic: Option<i32>,
    blood_pressure_diastolic: Option<i32>,
    sleep_hours: Option<f64>,
    sleep_quality: Option<i32>,
    steps: Option<i32>,
    activity_level: Option<i32>,
    mood: Option<String>,
    notes: Option<String>,
    is_manual_entry: Option<bool>,
    data_source: Option<String>,
}

/// Sample representation returned to clients: the raw columns plus the
/// composed "systolic/diastolic" reading when both halves exist.
#[derive(Serialize)]
struct SamplePayload {
    id: Uuid,
    user_id: String,
    timestamp: DateTime<Utc>,
    heart_rate: Option<i32>,
    blood_pressure: Option<String>,
    blood_pressure_systolic: Option<i32>,
    blood_pressure_diastolic: Option<i32>,
    sleep_hours: Option<f64>,
    sleep_quality: Option<i32>,
    steps: Option<i32>,
    activity_level: Option<i32>,
    mood: Option<String>,
    notes: Option<String>,
    is_manual_entry: bool,
    data_source: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<HealthSampleRow> for SamplePayload {
    fn from(row: HealthSampleRow) -> Self {
        let blood_pressure = match (row.blood_pressure_systolic, row.blood_pressure_diastolic) {
            (Some(systolic), Some(diastolic)) => Some(format!("{systolic}/{diastolic}")),
            _ => None,
        };
        Self {
            id: row.id,
            user_id: row.user_id,
            timestamp: row.timestamp,
            heart_rate: row.heart_rate,
            blood_pressure,
            blood_pressure_systolic: row.blood_pressure_systolic,
            blood_pressure_diastolic: row.blood_pressure_diastolic,
            sleep_hours: row.sleep_hours,
            sleep_quality: row.sleep_quality,
            steps: row.steps,
            activity_level: row.activity_level,
            mood: row.mood,
            notes: row.notes,
            is_manual_entry: row.is_manual_entry,
            data_source: row.data_source,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Serialize)]
struct HealthDataResponse {
    data: Vec<SamplePayload>,
    count: usize,
}

#[derive(Serialize)]
struct AddSampleResponse {
    message: String,
    data: SamplePayload,
}

#[derive(Deserialize)]
struct SimulatePayload {
    user_id: Option<String>,
    days: Option<u32>,
    seed: Option<u64>,
}

#[derive(Serialize)]
struct SimulateResponse {
    message: String,
    count: usize,
}

#[derive(Serialize)]
struct AlertCounts {
    urgent: usize,
    warning: usize,
    info: usize,
}

#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
    message: &'static str,
    alert_counts: AlertCounts,
    last_updated: Option<DateTime<Utc>>,
}

async fn get_health_data(
    State(state): State<SharedState>,
    Query(params): Query<UserScopedParams>,
) -> Result<Json<HealthDataResponse>, ApiError> {
    let user_id = require_user_id(params.user_id)?;
    let days = params.days.unwrap_or(7);

    let rows = db::list_samples(&state.pool, &user_id, days).await?;
    let data: Vec<SamplePayload> = rows.into_iter().map(SamplePayload::from).collect();

    Ok(Json(HealthDataResponse {
        count: data.len(),
        data,
    }))
}

/// Ingest one measurement batch. The sample is evaluated against the
/// user's thresholds and persisted together with any derived alerts in a
/// single transaction; a rejected payload stores nothing.
async fn add_health_data(
    State(state): State<SharedState>,
    Json(payload): Json<NewSamplePayload>,
) -> Result<(StatusCode, Json<AddSampleResponse>), ApiError> {
    let user_id = require_user_id(payload.user_id)?;

    let data_source = payload.data_source.unwrap_or_else(|| "manual".to_string());
    if !matches!(data_source.as_str(), "manual" | "simulation" | "device") {
        return Err(ApiError::Validation(format!(
            "unknown data_source \"{data_source}\""
        )));
    }

    let thresholds = db::resolve_thresholds(&state.pool, &user_id).await?;
    let vitals = SampleVitals {
        heart_rate: payload.heart_rate,
        blood_pressure_systolic: payload.blood_pressure_systolic,
        blood_pressure_diastolic: payload.blood_pressure_diastolic,
        sleep_hours: payload.sleep_hours,
        activity_level: payload.activity_level,
    };
    let drafts = vitals::evaluate(&vitals, &thresholds);

    let sample = NewHealthSample {
        user_id,
        timestamp: payload.timestamp.unwrap_or_else(Utc::now),
        heart_rate: payload.heart_rate,
        blood_pressure_systolic: payload.blood_pressure_systolic,
        blood_pressure_diastolic: payload.blood_pressure_diastolic,
        sleep_hours: payload.sleep_hours,
        sleep_quality: payload.sleep_quality,
        steps: payload.steps,
        activity_level: payload.activity_level,
        mood: payload.mood,
        notes: payload.notes,
        is_manual_entry: payload.is_manual_entry.unwrap_or(true),
        data_source,
    };

    let row = db::insert_sample_with_alerts(&state.pool, &sample, &thresholds, &drafts).await?;

    Ok((
        StatusCode::CREATED,
        Json(AddSampleResponse {
            message: "Health data added successfully".to_string(),
            data: row.into(),
        }),
    ))
}

/// Regenerate the user's demonstration series. An explicit seed makes the
/// run reproducible; without one the series differs per call.
async fn simulate_health_data(
    State(state): State<SharedState>,
    Json(payload): Json<SimulatePayload>,
) -> Result<Json<SimulateResponse>, ApiError> {
    let user_id = require_user_id(payload.user_id)?;
    let days = payload.days.unwrap_or(7);

    let mut rng = match payload.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let samples = simulation::generate_series(days, Utc::now(), &mut rng);
    let pattern_alerts = simulation::pattern_alerts(&mut rng);

    let count =
        db::replace_simulated_samples(&state.pool, &user_id, &samples, &pattern_alerts).await?;

    Ok(Json(SimulateResponse {
        message: format!("Generated {count} simulated health data entries"),
        count,
    }))
}

async fn overall_status(
    State(state): State<SharedState>,
    Query(params): Query<UserScopedParams>,
) -> Result<Json<StatusResponse>, ApiError> {
    let user_id = require_user_id(params.user_id)?;

    let recent = db::recent_active_alerts(&state.pool, &user_id, 24).await?;
    let urgent = recent.iter().filter(|a| a.alert_type == "alert").count();
    let warning = recent.iter().filter(|a| a.alert_type == "warning").count();
    let info = recent.iter().filter(|a| a.alert_type == "info").count();

    let (status, message) = summarize(urgent, warning);
    let latest = db::latest_sample(&state.pool, &user_id).await?;

    Ok(Json(StatusResponse {
        status,
        message,
        alert_counts: AlertCounts {
            urgent,
            warning,
            info,
        },
        last_updated: latest.map(|sample| sample.timestamp),
    }))
}

fn summarize(urgent: usize, warnings: usize) -> (&'static str, &'static str) {
    if urgent > 0 {
        ("alert", "Immediate attention required")
    } else if warnings > 0 {
        ("warning", "Some patterns need attention")
    } else {
        ("good", "Everything looks normal")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_precedence() {
        assert_eq!(summarize(1, 5).0, "alert");
        assert_eq!(summarize(0, 2).0, "warning");
        assert_eq!(summarize(0, 1).0, "warning");
        assert_eq!(summarize(0, 0).0, "good");
    }
}

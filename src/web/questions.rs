use crate::db::{self, QuestionRow};
use crate::domain::response;
use crate::error::ApiError;
use crate::state::SharedState;
use crate::web::require_user_id;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/questions", get(get_question_responses))
        .route("/questions/response", post(save_question_response))
        .with_state(state)
}

#[derive(Deserialize)]
struct QuestionListParams {
    user_id: Option<String>,
    days: Option<i64>,
}

#[derive(Deserialize)]
struct QuestionResponsePayload {
    user_id: Option<String>,
    question: Option<String>,
    response: Option<String>,
}

#[derive(Serialize)]
struct SaveResponseResponse {
    message: &'static str,
    question: QuestionRow,
    alerts_created: Vec<&'static str>,
}

#[derive(Serialize)]
struct QuestionListResponse {
    questions: Vec<QuestionRow>,
    count: usize,
}

/// Log a check-in answer and run it through the response classifier. The
/// answer and any resulting alert are stored in one transaction; the routed
/// topic (if any) is reported back.
async fn save_question_response(
    State(state): State<SharedState>,
    Json(payload): Json<QuestionResponsePayload>,
) -> Result<(StatusCode, Json<SaveResponseResponse>), ApiError> {
    let user_id = require_user_id(payload.user_id)?;
    let (Some(question), Some(response_text)) = (
        payload.question.filter(|v| !v.trim().is_empty()),
        payload.response.filter(|v| !v.trim().is_empty()),
    ) else {
        return Err(ApiError::Validation(
            "user_id, question, and response are required".to_string(),
        ));
    };

    let outcome = response::classify(&question, &response_text);
    let (topic, draft) = match outcome {
        Some((topic, draft)) => (Some(topic), Some(draft)),
        None => (None, None),
    };

    let row = db::insert_question_with_alert(
        &state.pool,
        &user_id,
        &question,
        &response_text,
        draft.as_ref(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(SaveResponseResponse {
            message: "Response saved successfully",
            question: row,
            alerts_created: topic.map(|t| vec![t.as_str()]).unwrap_or_default(),
        }),
    ))
}

async fn get_question_responses(
    State(state): State<SharedState>,
    Query(params): Query<QuestionListParams>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let user_id = require_user_id(params.user_id)?;
    let days = params.days.unwrap_or(7);

    let questions = db::list_questions(&state.pool, &user_id, days).await?;

    Ok(Json(QuestionListResponse {
        count: questions.len(),
        questions,
    }))
}

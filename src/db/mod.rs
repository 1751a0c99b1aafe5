pub mod seed;

use anyhow::Result;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::domain::alert::AlertDraft;
use crate::domain::simulation::SimulatedSample;
use crate::domain::thresholds::{ThresholdOverrides, ThresholdSet};

const ALERT_COLUMNS: &str = "id, user_id, alert_type, title, message, metric, value, \
     threshold_data, is_dismissed, is_acknowledged, created_at, dismissed_at, acknowledged_at";

const SAMPLE_COLUMNS: &str = "id, user_id, timestamp, heart_rate, blood_pressure_systolic, \
     blood_pressure_diastolic, sleep_hours, sleep_quality, steps, activity_level, mood, notes, \
     is_manual_entry, data_source, created_at, updated_at";

const REMINDER_COLUMNS: &str = "id, user_id, title, description, priority, status, \
     reminder_type, start_date, last_completed_date, created_at, completed_at, created_by";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HealthSampleRow {
    pub id: Uuid,
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    pub heart_rate: Option<i32>,
    pub blood_pressure_systolic: Option<i32>,
    pub blood_pressure_diastolic: Option<i32>,
    pub sleep_hours: Option<f64>,
    pub sleep_quality: Option<i32>,
    pub steps: Option<i32>,
    pub activity_level: Option<i32>,
    pub mood: Option<String>,
    pub notes: Option<String>,
    pub is_manual_entry: bool,
    pub data_source: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for one measurement batch.
#[derive(Debug, Clone)]
pub struct NewHealthSample {
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    pub heart_rate: Option<i32>,
    pub blood_pressure_systolic: Option<i32>,
    pub blood_pressure_diastolic: Option<i32>,
    pub sleep_hours: Option<f64>,
    pub sleep_quality: Option<i32>,
    pub steps: Option<i32>,
    pub activity_level: Option<i32>,
    pub mood: Option<String>,
    pub notes: Option<String>,
    pub is_manual_entry: bool,
    pub data_source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AlertRow {
    pub id: Uuid,
    pub user_id: String,
    pub alert_type: String,
    pub title: String,
    pub message: String,
    pub metric: Option<String>,
    pub value: Option<String>,
    pub threshold_data: Option<serde_json::Value>,
    pub is_dismissed: bool,
    pub is_acknowledged: bool,
    pub created_at: DateTime<Utc>,
    pub dismissed_at: Option<DateTime<Utc>>,
    pub acknowledged_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfileRow {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub user_type: String,
    pub monitored_user_id: Option<String>,
    pub alert_thresholds: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuestionRow {
    pub id: Uuid,
    pub user_id: String,
    pub question_text: String,
    pub response: Option<String>,
    pub asked_at: DateTime<Utc>,
    pub responded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReminderRow {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub status: String,
    pub reminder_type: String,
    pub start_date: Option<NaiveDate>,
    pub last_completed_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewReminder {
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub reminder_type: String,
    pub start_date: Option<NaiveDate>,
    pub created_by: Option<String>,
}

// ========== Threshold resolution ==========

/// Resolve the active threshold set for a user: stored overrides merged
/// onto the defaults, or the defaults when no profile/override exists.
/// Never returns a partial set. A stored value this system cannot decode
/// is an integrity fault and propagates, never guessed around.
pub async fn resolve_thresholds(pool: &PgPool, user_id: &str) -> Result<ThresholdSet> {
    let stored = sqlx::query_scalar::<_, Option<serde_json::Value>>(
        r#"
        SELECT alert_thresholds
        FROM user_profiles
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    let Some(raw) = stored.flatten() else {
        return Ok(ThresholdSet::default());
    };

    let overrides: ThresholdOverrides = serde_json::from_value(raw).map_err(|err| {
        tracing::error!(
            "stored alert thresholds for user {} are corrupt: {}",
            user_id,
            err
        );
        err
    })?;

    Ok(ThresholdSet::default().merged(&overrides))
}

// ========== Health samples ==========

/// Persist one sample together with every alert it produced. The sample
/// and its alerts commit or roll back as one unit; a partial alert set is
/// never left behind.
pub async fn insert_sample_with_alerts(
    pool: &PgPool,
    sample: &NewHealthSample,
    thresholds: &ThresholdSet,
    drafts: &[AlertDraft],
) -> Result<HealthSampleRow> {
    let mut tx = pool.begin().await?;

    let row = sqlx::query_as::<_, HealthSampleRow>(&format!(
        r#"
        INSERT INTO health_data (id, user_id, timestamp, heart_rate, blood_pressure_systolic,
            blood_pressure_diastolic, sleep_hours, sleep_quality, steps, activity_level,
            mood, notes, is_manual_entry, data_source)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        RETURNING {SAMPLE_COLUMNS}
        "#
    ))
    .bind(Uuid::new_v4())
    .bind(&sample.user_id)
    .bind(sample.timestamp)
    .bind(sample.heart_rate)
    .bind(sample.blood_pressure_systolic)
    .bind(sample.blood_pressure_diastolic)
    .bind(sample.sleep_hours)
    .bind(sample.sleep_quality)
    .bind(sample.steps)
    .bind(sample.activity_level)
    .bind(&sample.mood)
    .bind(&sample.notes)
    .bind(sample.is_manual_entry)
    .bind(&sample.data_source)
    .fetch_one(&mut *tx)
    .await?;

    let snapshot = serde_json::to_value(thresholds)?;
    for draft in drafts {
        insert_alert(&mut tx, &sample.user_id, draft, Some(&snapshot)).await?;
    }

    tx.commit().await?;
    Ok(row)
}

/// Samples for the last N days, oldest first. The window is padded a day on
/// each side so the full current day is always included.
pub async fn list_samples(
    pool: &PgPool,
    user_id: &str,
    days: i64,
) -> Result<Vec<HealthSampleRow>> {
    let end = Utc::now() + Duration::days(1);
    let start = end - Duration::days(days + 1);

    let rows = sqlx::query_as::<_, HealthSampleRow>(&format!(
        r#"
        SELECT {SAMPLE_COLUMNS}
        FROM health_data
        WHERE user_id = $1
          AND timestamp >= $2
          AND timestamp <= $3
        ORDER BY timestamp ASC
        "#
    ))
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn latest_sample(pool: &PgPool, user_id: &str) -> Result<Option<HealthSampleRow>> {
    let row = sqlx::query_as::<_, HealthSampleRow>(&format!(
        r#"
        SELECT {SAMPLE_COLUMNS}
        FROM health_data
        WHERE user_id = $1
        ORDER BY timestamp DESC
        LIMIT 1
        "#
    ))
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Resimulation cleanup: drop the user's previous simulated rows, insert
/// the new series and any demonstration pattern alerts, all in one
/// transaction.
pub async fn replace_simulated_samples(
    pool: &PgPool,
    user_id: &str,
    samples: &[SimulatedSample],
    pattern_alerts: &[AlertDraft],
) -> Result<usize> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        DELETE FROM health_data
        WHERE user_id = $1
          AND data_source = 'simulation'
        "#,
    )
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    for sample in samples {
        sqlx::query(
            r#"
            INSERT INTO health_data (id, user_id, timestamp, heart_rate, blood_pressure_systolic,
                blood_pressure_diastolic, sleep_hours, sleep_quality, steps, activity_level,
                is_manual_entry, data_source)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, FALSE, 'simulation')
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(sample.timestamp)
        .bind(sample.heart_rate)
        .bind(sample.blood_pressure_systolic)
        .bind(sample.blood_pressure_diastolic)
        .bind(sample.sleep_hours)
        .bind(sample.sleep_quality)
        .bind(sample.steps)
        .bind(sample.activity_level)
        .execute(&mut *tx)
        .await?;
    }

    for draft in pattern_alerts {
        insert_alert(&mut tx, user_id, draft, None).await?;
    }

    tx.commit().await?;
    Ok(samples.len())
}

// ========== Alert store ==========

async fn insert_alert(
    tx: &mut Transaction<'_, Postgres>,
    user_id: &str,
    draft: &AlertDraft,
    threshold_data: Option<&serde_json::Value>,
) -> Result<AlertRow> {
    let row = sqlx::query_as::<_, AlertRow>(&format!(
        r#"
        INSERT INTO alerts (id, user_id, alert_type, title, message, metric, value, threshold_data)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {ALERT_COLUMNS}
        "#
    ))
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(draft.severity.as_str())
    .bind(&draft.title)
    .bind(&draft.message)
    .bind(draft.metric)
    .bind(&draft.value)
    .bind(threshold_data)
    .fetch_one(&mut **tx)
    .await?;

    Ok(row)
}

/// Caregiver-authored alert, bypassing the evaluators. Field presence is
/// checked by the caller; the content is stored verbatim.
pub async fn create_manual_alert(
    pool: &PgPool,
    user_id: &str,
    alert_type: &str,
    title: &str,
    message: &str,
    metric: Option<&str>,
    value: Option<&str>,
) -> Result<AlertRow> {
    let row = sqlx::query_as::<_, AlertRow>(&format!(
        r#"
        INSERT INTO alerts (id, user_id, alert_type, title, message, metric, value)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {ALERT_COLUMNS}
        "#
    ))
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(alert_type)
    .bind(title)
    .bind(message)
    .bind(metric)
    .bind(value)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Newest-first alert listing. Dismissed alerts are hidden unless asked for.
pub async fn list_alerts(
    pool: &PgPool,
    user_id: &str,
    include_dismissed: bool,
    limit: i64,
) -> Result<Vec<AlertRow>> {
    let rows = if include_dismissed {
        sqlx::query_as::<_, AlertRow>(&format!(
            r#"
            SELECT {ALERT_COLUMNS}
            FROM alerts
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#
        ))
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?
    } else {
        sqlx::query_as::<_, AlertRow>(&format!(
            r#"
            SELECT {ALERT_COLUMNS}
            FROM alerts
            WHERE user_id = $1
              AND is_dismissed = FALSE
            ORDER BY created_at DESC
            LIMIT $2
            "#
        ))
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?
    };

    Ok(rows)
}

pub async fn get_alert(pool: &PgPool, alert_id: Uuid) -> Result<Option<AlertRow>> {
    let row = sqlx::query_as::<_, AlertRow>(&format!(
        r#"
        SELECT {ALERT_COLUMNS}
        FROM alerts
        WHERE id = $1
        "#
    ))
    .bind(alert_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Mark an alert dismissed. Idempotent: a repeat call succeeds and keeps
/// the original dismissal timestamp.
pub async fn dismiss_alert(pool: &PgPool, alert_id: Uuid) -> Result<Option<AlertRow>> {
    let Some(alert) = get_alert(pool, alert_id).await? else {
        return Ok(None);
    };
    if alert.is_dismissed {
        return Ok(Some(alert));
    }

    let row = sqlx::query_as::<_, AlertRow>(&format!(
        r#"
        UPDATE alerts
        SET is_dismissed = TRUE, dismissed_at = NOW()
        WHERE id = $1
        RETURNING {ALERT_COLUMNS}
        "#
    ))
    .bind(alert_id)
    .fetch_one(pool)
    .await?;

    Ok(Some(row))
}

/// Same contract as [`dismiss_alert`], for the acknowledged flag.
pub async fn acknowledge_alert(pool: &PgPool, alert_id: Uuid) -> Result<Option<AlertRow>> {
    let Some(alert) = get_alert(pool, alert_id).await? else {
        return Ok(None);
    };
    if alert.is_acknowledged {
        return Ok(Some(alert));
    }

    let row = sqlx::query_as::<_, AlertRow>(&format!(
        r#"
        UPDATE alerts
        SET is_acknowledged = TRUE, acknowledged_at = NOW()
        WHERE id = $1
        RETURNING {ALERT_COLUMNS}
        "#
    ))
    .bind(alert_id)
    .fetch_one(pool)
    .await?;

    Ok(Some(row))
}

pub async fn delete_alert(pool: &PgPool, alert_id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM alerts
        WHERE id = $1
        "#,
    )
    .bind(alert_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Undismissed alerts from the last N hours, for the overall-status view.
pub async fn recent_active_alerts(
    pool: &PgPool,
    user_id: &str,
    hours: i64,
) -> Result<Vec<AlertRow>> {
    let rows = sqlx::query_as::<_, AlertRow>(&format!(
        r#"
        SELECT {ALERT_COLUMNS}
        FROM alerts
        WHERE user_id = $1
          AND is_dismissed = FALSE
          AND created_at >= NOW() - ($2 || ' hours')::INTERVAL
        "#
    ))
    .bind(user_id)
    .bind(hours.to_string())
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

// ========== Question responses ==========

/// Store a check-in response and, when the classifier flagged it, the
/// resulting alert — atomically.
pub async fn insert_question_with_alert(
    pool: &PgPool,
    user_id: &str,
    question_text: &str,
    response: &str,
    draft: Option<&AlertDraft>,
) -> Result<QuestionRow> {
    let mut tx = pool.begin().await?;

    let row = sqlx::query_as::<_, QuestionRow>(
        r#"
        INSERT INTO questions (id, user_id, question_text, response, responded_at)
        VALUES ($1, $2, $3, $4, NOW())
        RETURNING id, user_id, question_text, response, asked_at, responded_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(question_text)
    .bind(response)
    .fetch_one(&mut *tx)
    .await?;

    if let Some(draft) = draft {
        insert_alert(&mut tx, user_id, draft, None).await?;
    }

    tx.commit().await?;
    Ok(row)
}

pub async fn list_questions(pool: &PgPool, user_id: &str, days: i64) -> Result<Vec<QuestionRow>> {
    let rows = sqlx::query_as::<_, QuestionRow>(
        r#"
        SELECT id, user_id, question_text, response, asked_at, responded_at
        FROM questions
        WHERE user_id = $1
          AND asked_at >= NOW() - ($2 || ' days')::INTERVAL
        ORDER BY asked_at DESC
        "#,
    )
    .bind(user_id)
    .bind(days.to_string())
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

// ========== User profiles ==========

pub async fn get_profile(pool: &PgPool, user_id: &str) -> Result<Option<UserProfileRow>> {
    let row = sqlx::query_as::<_, UserProfileRow>(
        r#"
        SELECT id, user_id, name, user_type, monitored_user_id, alert_thresholds,
               created_at, updated_at, last_login
        FROM user_profiles
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Write back a fetched-and-modified profile row.
pub async fn update_profile(pool: &PgPool, profile: &UserProfileRow) -> Result<UserProfileRow> {
    let row = sqlx::query_as::<_, UserProfileRow>(
        r#"
        UPDATE user_profiles
        SET name = $2,
            user_type = $3,
            monitored_user_id = $4,
            alert_thresholds = $5,
            updated_at = NOW()
        WHERE user_id = $1
        RETURNING id, user_id, name, user_type, monitored_user_id, alert_thresholds,
                  created_at, updated_at, last_login
        "#,
    )
    .bind(&profile.user_id)
    .bind(&profile.name)
    .bind(&profile.user_type)
    .bind(&profile.monitored_user_id)
    .bind(&profile.alert_thresholds)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

// ========== Reminders ==========

pub async fn insert_reminder(pool: &PgPool, reminder: &NewReminder) -> Result<ReminderRow> {
    let row = sqlx::query_as::<_, ReminderRow>(&format!(
        r#"
        INSERT INTO reminders (id, user_id, title, description, priority, reminder_type,
            start_date, created_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {REMINDER_COLUMNS}
        "#
    ))
    .bind(Uuid::new_v4())
    .bind(&reminder.user_id)
    .bind(&reminder.title)
    .bind(&reminder.description)
    .bind(&reminder.priority)
    .bind(&reminder.reminder_type)
    .bind(reminder.start_date)
    .bind(&reminder.created_by)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn get_reminder(pool: &PgPool, reminder_id: Uuid) -> Result<Option<ReminderRow>> {
    let row = sqlx::query_as::<_, ReminderRow>(&format!(
        r#"
        SELECT {REMINDER_COLUMNS}
        FROM reminders
        WHERE id = $1
        "#
    ))
    .bind(reminder_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn list_all_reminders(pool: &PgPool, user_id: &str) -> Result<Vec<ReminderRow>> {
    let rows = sqlx::query_as::<_, ReminderRow>(&format!(
        r#"
        SELECT {REMINDER_COLUMNS}
        FROM reminders
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn list_active_reminders(pool: &PgPool, user_id: &str) -> Result<Vec<ReminderRow>> {
    let rows = sqlx::query_as::<_, ReminderRow>(&format!(
        r#"
        SELECT {REMINDER_COLUMNS}
        FROM reminders
        WHERE user_id = $1
          AND status = 'active'
        ORDER BY created_at DESC
        "#
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Completed reminders from the last N days, most recently completed first.
pub async fn list_completed_reminders(
    pool: &PgPool,
    user_id: &str,
    days: i64,
) -> Result<Vec<ReminderRow>> {
    let rows = sqlx::query_as::<_, ReminderRow>(&format!(
        r#"
        SELECT {REMINDER_COLUMNS}
        FROM reminders
        WHERE user_id = $1
          AND status = 'completed'
          AND completed_at >= NOW() - ($2 || ' days')::INTERVAL
        ORDER BY completed_at DESC
        "#
    ))
    .bind(user_id)
    .bind(days.to_string())
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn list_daily_reminders(pool: &PgPool, user_id: &str) -> Result<Vec<ReminderRow>> {
    let rows = sqlx::query_as::<_, ReminderRow>(&format!(
        r#"
        SELECT {REMINDER_COLUMNS}
        FROM reminders
        WHERE user_id = $1
          AND reminder_type = 'daily'
          AND status = 'active'
        ORDER BY created_at DESC
        "#
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn list_active_event_reminders(
    pool: &PgPool,
    user_id: &str,
) -> Result<Vec<ReminderRow>> {
    let rows = sqlx::query_as::<_, ReminderRow>(&format!(
        r#"
        SELECT {REMINDER_COLUMNS}
        FROM reminders
        WHERE user_id = $1
          AND reminder_type = 'event'
          AND status = 'active'
        ORDER BY created_at DESC
        "#
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Reminders that should be shown today: started event reminders plus
/// daily reminders not yet completed today.
pub async fn list_reminders_for_today(
    pool: &PgPool,
    user_id: &str,
    today: NaiveDate,
) -> Result<Vec<ReminderRow>> {
    let mut rows = sqlx::query_as::<_, ReminderRow>(&format!(
        r#"
        SELECT {REMINDER_COLUMNS}
        FROM reminders
        WHERE user_id = $1
          AND reminder_type = 'event'
          AND status = 'active'
          AND start_date <= $2
        ORDER BY created_at DESC
        "#
    ))
    .bind(user_id)
    .bind(today)
    .fetch_all(pool)
    .await?;

    let daily = sqlx::query_as::<_, ReminderRow>(&format!(
        r#"
        SELECT {REMINDER_COLUMNS}
        FROM reminders
        WHERE user_id = $1
          AND reminder_type = 'daily'
          AND status = 'active'
          AND (last_completed_date IS NULL OR last_completed_date < $2)
        ORDER BY created_at DESC
        "#
    ))
    .bind(user_id)
    .bind(today)
    .fetch_all(pool)
    .await?;

    rows.extend(daily);
    Ok(rows)
}

/// Daily reminders only record their last completion date and stay active;
/// event reminders flip to completed for good.
pub async fn complete_reminder(
    pool: &PgPool,
    reminder_id: Uuid,
    today: NaiveDate,
) -> Result<Option<ReminderRow>> {
    let Some(reminder) = get_reminder(pool, reminder_id).await? else {
        return Ok(None);
    };

    let row = if reminder.reminder_type == "daily" {
        sqlx::query_as::<_, ReminderRow>(&format!(
            r#"
            UPDATE reminders
            SET last_completed_date = $2
            WHERE id = $1
            RETURNING {REMINDER_COLUMNS}
            "#
        ))
        .bind(reminder_id)
        .bind(today)
        .fetch_one(pool)
        .await?
    } else {
        sqlx::query_as::<_, ReminderRow>(&format!(
            r#"
            UPDATE reminders
            SET status = 'completed', completed_at = NOW()
            WHERE id = $1
            RETURNING {REMINDER_COLUMNS}
            "#
        ))
        .bind(reminder_id)
        .fetch_one(pool)
        .await?
    };

    Ok(Some(row))
}

/// Write back a fetched-and-modified reminder row.
pub async fn update_reminder(pool: &PgPool, reminder: &ReminderRow) -> Result<ReminderRow> {
    let row = sqlx::query_as::<_, ReminderRow>(&format!(
        r#"
        UPDATE reminders
        SET title = $2,
            description = $3,
            priority = $4,
            reminder_type = $5,
            start_date = $6
        WHERE id = $1
        RETURNING {REMINDER_COLUMNS}
        "#
    ))
    .bind(reminder.id)
    .bind(&reminder.title)
    .bind(&reminder.description)
    .bind(&reminder.priority)
    .bind(&reminder.reminder_type)
    .bind(reminder.start_date)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn delete_reminder(pool: &PgPool, reminder_id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM reminders
        WHERE id = $1
        "#,
    )
    .bind(reminder_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::models::{Reminder, ReminderPatch};
use crate::router::AppState;

pub async fn root() -> &'static str {
    "Hello World!"
}

/// Creation validates the original contract directly on the JSON value:
/// the four string fields must be present and non-empty, and
/// `isCompleted` must be a real boolean. Anything else is a 400.
fn parse_create(body: &Value) -> Option<Reminder> {
    let text = |key: &str| {
        body.get(key)?
            .as_str()
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    };
    Some(Reminder {
        id: text("id")?,
        title: text("title")?,
        description: text("description")?,
        due_date: text("dueDate")?,
        is_completed: body.get("isCompleted")?.as_bool()?,
    })
}

pub async fn create_reminder(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let reminder = parse_create(&body).ok_or(ApiError::InvalidInput)?;
    tracing::info!(id = %reminder.id, "creating reminder");
    state.store.create(reminder);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Reminder created" })),
    ))
}

pub async fn list_reminders(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let reminders = state.store.list();
    if reminders.is_empty() {
        return Err(ApiError::NotFound("No reminders found".to_string()));
    }
    Ok(Json(reminders))
}

pub async fn get_reminder(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let reminder = state.store.get(&id).ok_or_else(ApiError::reminder_not_found)?;
    Ok(Json(reminder))
}

pub async fn update_reminder(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(patch): Json<ReminderPatch>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .store
        .update(&id, patch)
        .ok_or_else(ApiError::reminder_not_found)?;
    Ok(Json(json!({ "message": "Reminder updated" })))
}

pub async fn delete_reminder(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .store
        .delete(&id)
        .ok_or_else(ApiError::reminder_not_found)?;
    tracing::info!(id = %id, "deleted reminder");
    Ok(Json(json!({ "message": "Reminder deleted" })))
}

pub async fn mark_completed(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .store
        .set_completed(&id, true)
        .ok_or_else(ApiError::reminder_not_found)?;
    Ok(Json(json!({ "message": "Reminder marked as completed" })))
}

pub async fn unmark_completed(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .store
        .set_completed(&id, false)
        .ok_or_else(ApiError::reminder_not_found)?;
    Ok(Json(json!({ "message": "Reminder unmarked as completed" })))
}

pub async fn completed_reminders(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let reminders = state.store.filter(|r| r.is_completed);
    if reminders.is_empty() {
        return Err(ApiError::NotFound("No completed reminders found".to_string()));
    }
    Ok(Json(reminders))
}

pub async fn not_completed_reminders(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let reminders = state.store.filter(|r| !r.is_completed);
    if reminders.is_empty() {
        return Err(ApiError::NotFound(
            "No uncompleted reminders found".to_string(),
        ));
    }
    Ok(Json(reminders))
}

/// "Today" is the request-time UTC date as a `YYYY-MM-DD` string, compared
/// to `dueDate` by exact string equality.
pub async fn due_today_reminders(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    let reminders = state.store.filter(|r| r.due_date == today);
    if reminders.is_empty() {
        return Err(ApiError::NotFound("No reminders due today".to_string()));
    }
    Ok(Json(reminders))
}

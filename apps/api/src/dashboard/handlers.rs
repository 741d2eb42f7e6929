//! Axum route handlers for the dashboard CRUD surfaces.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::dashboard::models::{Application, DashboardStats, Notification, SavedJob};
use crate::dashboard::normalize::{
    apply_application_update, normalize_application, normalize_saved_job, ApplicationDraft,
    ApplicationUpdate, SavedJobDraft, APPLICATION_DEFAULTS,
};
use crate::dashboard::store::{compute_stats, Repository};
use crate::errors::AppError;
use crate::models::Proposal;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Applications
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/applications
pub async fn handle_list_applications(State(state): State<AppState>) -> Json<Vec<Application>> {
    Json(state.stores.applications.list())
}

/// POST /api/v1/applications
pub async fn handle_create_application(
    State(state): State<AppState>,
    Json(draft): Json<ApplicationDraft>,
) -> Result<(StatusCode, Json<Application>), AppError> {
    let application = normalize_application(draft, &APPLICATION_DEFAULTS)?;
    Ok((
        StatusCode::CREATED,
        Json(state.stores.applications.save(application)),
    ))
}

/// PATCH /api/v1/applications/:id
pub async fn handle_update_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<ApplicationUpdate>,
) -> Result<Json<Application>, AppError> {
    let existing = state
        .stores
        .applications
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;
    let updated = apply_application_update(existing, update);
    Ok(Json(state.stores.applications.save(updated)))
}

/// DELETE /api/v1/applications/:id
pub async fn handle_delete_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.stores.applications.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Application {id} not found")))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Saved jobs
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/saved-jobs
pub async fn handle_list_saved_jobs(State(state): State<AppState>) -> Json<Vec<SavedJob>> {
    Json(state.stores.saved_jobs.list())
}

/// POST /api/v1/saved-jobs
///
/// Idempotent per job: re-saving an already-bookmarked job returns the
/// existing bookmark instead of duplicating it.
pub async fn handle_save_job(
    State(state): State<AppState>,
    Json(draft): Json<SavedJobDraft>,
) -> (StatusCode, Json<SavedJob>) {
    if let Some(existing) = state
        .stores
        .saved_jobs
        .list()
        .into_iter()
        .find(|saved| saved.job.id == draft.job.id)
    {
        return (StatusCode::OK, Json(existing));
    }
    let saved = state.stores.saved_jobs.save(normalize_saved_job(draft));
    (StatusCode::CREATED, Json(saved))
}

/// DELETE /api/v1/saved-jobs/:id
pub async fn handle_delete_saved_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.stores.saved_jobs.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Saved job {id} not found")))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Proposals, notifications, stats
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/proposals
pub async fn handle_list_proposals(State(state): State<AppState>) -> Json<Vec<Proposal>> {
    Json(state.stores.proposals.list())
}

/// GET /api/v1/notifications
pub async fn handle_list_notifications(State(state): State<AppState>) -> Json<Vec<Notification>> {
    Json(state.stores.notifications.list())
}

/// POST /api/v1/notifications/:id/read
pub async fn handle_mark_notification_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let mut notification = state
        .stores
        .notifications
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Notification {id} not found")))?;
    notification.read = true;
    state.stores.notifications.save(notification);
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/stats
pub async fn handle_stats(State(state): State<AppState>) -> Json<DashboardStats> {
    Json(compute_stats(&state.stores))
}

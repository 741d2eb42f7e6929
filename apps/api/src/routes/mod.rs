pub mod health;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::dashboard::handlers as dashboard;
use crate::matching::handlers as matching;
use crate::state::AppState;
use crate::submission::handlers as submission;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Match pipeline
        .route("/api/v1/match/score", post(matching::handle_score))
        .route("/api/v1/match/rank", post(matching::handle_rank))
        .route(
            "/api/v1/match/auto-submit",
            post(submission::handle_auto_submit),
        )
        .route(
            "/api/v1/proposals/preview",
            post(matching::handle_preview),
        )
        // Dashboard
        .route(
            "/api/v1/applications",
            get(dashboard::handle_list_applications).post(dashboard::handle_create_application),
        )
        .route(
            "/api/v1/applications/:id",
            patch(dashboard::handle_update_application)
                .delete(dashboard::handle_delete_application),
        )
        .route(
            "/api/v1/saved-jobs",
            get(dashboard::handle_list_saved_jobs).post(dashboard::handle_save_job),
        )
        .route(
            "/api/v1/saved-jobs/:id",
            delete(dashboard::handle_delete_saved_job),
        )
        .route("/api/v1/proposals", get(dashboard::handle_list_proposals))
        .route(
            "/api/v1/notifications",
            get(dashboard::handle_list_notifications),
        )
        .route(
            "/api/v1/notifications/:id/read",
            post(dashboard::handle_mark_notification_read),
        )
        .route("/api/v1/stats", get(dashboard::handle_stats))
        .with_state(state)
}

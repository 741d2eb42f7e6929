//! Axum route handler for auto-submission.

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, Json};
use tracing::info;

use crate::dashboard::models::{Notification, NotificationKind};
use crate::dashboard::store::Repository;
use crate::state::AppState;
use crate::submission::orchestrator::{
    auto_submit_top_matches, AutoSubmitOutcome, AutoSubmitRequest, SubmitLimits,
};

/// POST /api/v1/match/auto-submit
///
/// Ranks the supplied jobs and submits the qualifying proposals. The batch
/// never fails as a whole — per-item outcomes are in `results`. Successful
/// submissions are recorded in the proposal store and raise a notification.
pub async fn handle_auto_submit(
    State(state): State<AppState>,
    Json(request): Json<AutoSubmitRequest>,
) -> Json<AutoSubmitOutcome> {
    let limits = SubmitLimits {
        concurrency: state.config.submit_concurrency,
        timeout: Duration::from_secs(state.config.submit_timeout_secs),
    };

    let outcome = auto_submit_top_matches(Arc::clone(&state.submitter), request, limits).await;

    for item in &outcome.results {
        if let Some(proposal) = &item.proposal {
            state.stores.proposals.save(proposal.clone());
            state.stores.notifications.save(Notification::new(
                NotificationKind::ProposalSubmitted,
                format!("Proposal submitted for \"{}\"", item.job_title),
            ));
        }
    }

    info!(
        submitted = outcome.results.iter().filter(|r| r.ok).count(),
        failed = outcome.results.iter().filter(|r| !r.ok).count(),
        "auto-submit batch finished"
    );

    Json(outcome)
}

//! Axum route handlers for the match pipeline.
//!
//! The pipeline is pure, so these handlers are infallible: an empty job list
//! ranks to an empty `ranked`, which the UI renders as "no matches".

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::generation::cover_note::{generate_proposal, ProposalStyle};
use crate::matching::ranker::{rank_jobs, RankOptions, ScoredMatch, DEFAULT_TOP_N};
use crate::matching::scoring::{compute_match_breakdown, MatchBreakdown, MatchWeights};
use crate::models::{Job, Profile};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub job: Job,
    pub profile: Profile,
    #[serde(default)]
    pub weights: Option<MatchWeights>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub breakdown: MatchBreakdown,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub jobs: Vec<Job>,
    pub profile: Profile,
    #[serde(default)]
    pub top_n: Option<usize>,
    #[serde(default)]
    pub weights: Option<MatchWeights>,
    #[serde(default)]
    pub style: Option<ProposalStyle>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub ranked: Vec<ScoredMatch>,
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub job: Job,
    pub profile: Profile,
    #[serde(default)]
    pub style: Option<ProposalStyle>,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub proposal_text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match/score
///
/// Scores one job against the supplied profile and returns the full
/// per-dimension breakdown.
pub async fn handle_score(Json(request): Json<ScoreRequest>) -> Json<ScoreResponse> {
    let weights = request.weights.unwrap_or_default();
    Json(ScoreResponse {
        breakdown: compute_match_breakdown(&request.job, &request.profile, &weights),
    })
}

/// POST /api/v1/match/rank
///
/// Scores every supplied job, drafts a cover note per job, and returns the
/// top matches in descending score order.
pub async fn handle_rank(Json(request): Json<RankRequest>) -> Json<RankResponse> {
    let opts = RankOptions {
        top_n: request.top_n.unwrap_or(DEFAULT_TOP_N),
        weights: request.weights.unwrap_or_default(),
        style: request.style.unwrap_or_default(),
    };
    Json(RankResponse {
        ranked: rank_jobs(&request.jobs, &request.profile, &opts),
    })
}

/// POST /api/v1/proposals/preview
///
/// Renders the cover note for one job without submitting anything.
pub async fn handle_preview(Json(request): Json<PreviewRequest>) -> Json<PreviewResponse> {
    let style = request.style.unwrap_or_default();
    Json(PreviewResponse {
        proposal_text: generate_proposal(&request.job, &request.profile, &style),
    })
}

//! Auto-submission orchestrator.
//!
//! Flow: rank_jobs → threshold filter → submit each proposal through the
//! `ProposalSubmitter`, recording a per-item outcome. A failed submission is
//! caught, stringified, and recorded; it never aborts the rest of the batch
//! and is never retried.
//!
//! Serialization is an explicit knob rather than an assumption: the in-flight
//! limit defaults to 1 (strictly sequential, each submission awaited before
//! the next starts) and can be raised per request. Every submission is also
//! bounded by a timeout so one hung call cannot stall the batch.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};
use uuid::Uuid;

use crate::generation::cover_note::ProposalStyle;
use crate::matching::ranker::{rank_jobs, RankOptions, ScoredMatch, DEFAULT_TOP_N};
use crate::matching::scoring::MatchWeights;
use crate::models::{Job, Profile, Proposal};
use crate::submission::{ProposalSubmitter, SubmitError, SubmitProposalRequest};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Caller-facing request for an auto-submit run. The caller supplies the job
/// list and the acting profile; nothing is read from server-side state.
#[derive(Debug, Clone, Deserialize)]
pub struct AutoSubmitRequest {
    pub jobs: Vec<Job>,
    pub profile: Profile,
    #[serde(default)]
    pub top_n: Option<usize>,
    #[serde(default)]
    pub weights: Option<MatchWeights>,
    #[serde(default)]
    pub style: Option<ProposalStyle>,
    /// Minimum composite score a ranked match must reach to be submitted.
    #[serde(default)]
    pub threshold: Option<u32>,
    /// Overrides the configured in-flight submission limit for this run.
    #[serde(default)]
    pub concurrency: Option<usize>,
}

/// Runtime bounds for a submission batch, sourced from config.
#[derive(Debug, Clone, Copy)]
pub struct SubmitLimits {
    /// Max submissions in flight. 1 reproduces strict sequential submission.
    pub concurrency: usize,
    /// Per-submission deadline.
    pub timeout: Duration,
}

impl Default for SubmitLimits {
    fn default() -> Self {
        Self {
            concurrency: 1,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Terminal per-item outcome. `ok == true` carries the marketplace receipt,
/// `ok == false` carries the stringified failure.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRecord {
    pub ok: bool,
    pub job_id: Uuid,
    pub job_title: String,
    pub proposal: Option<Proposal>,
    pub error: Option<String>,
}

/// Both the full ranked list and the per-item outcomes, so the caller can
/// reconcile counts (`results` covers only the submitted subset).
#[derive(Debug, Serialize)]
pub struct AutoSubmitOutcome {
    pub ranked: Vec<ScoredMatch>,
    pub results: Vec<SubmissionRecord>,
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestration
// ────────────────────────────────────────────────────────────────────────────

/// Ranks the supplied jobs and submits the qualifying proposals.
///
/// Infallible by construction: every failure becomes a `SubmissionRecord`
/// with `ok == false`. Outcomes are reported in ranked order regardless of
/// the in-flight limit.
pub async fn auto_submit_top_matches(
    submitter: Arc<dyn ProposalSubmitter>,
    request: AutoSubmitRequest,
    limits: SubmitLimits,
) -> AutoSubmitOutcome {
    let opts = RankOptions {
        top_n: request.top_n.unwrap_or(DEFAULT_TOP_N),
        weights: request.weights.unwrap_or_default(),
        style: request.style.unwrap_or_default(),
    };
    let ranked = rank_jobs(&request.jobs, &request.profile, &opts);

    let to_submit: Vec<ScoredMatch> = match request.threshold {
        Some(threshold) => ranked
            .iter()
            .filter(|m| m.score >= threshold)
            .cloned()
            .collect(),
        None => ranked.clone(),
    };

    let concurrency = request.concurrency.unwrap_or(limits.concurrency).max(1);
    info!(
        ranked = ranked.len(),
        submitting = to_submit.len(),
        concurrency,
        "auto-submit batch starting"
    );

    let requests: Vec<SubmitProposalRequest> = to_submit
        .iter()
        .map(|m| SubmitProposalRequest {
            job_id: m.job.id,
            freelancer_id: request.profile.id,
            proposal_text: m.proposal_text.clone(),
            samples: m.samples.clone(),
            intro_type: opts.style.tone,
        })
        .collect();

    let results = if concurrency == 1 {
        submit_sequentially(submitter.as_ref(), &to_submit, &requests, limits.timeout).await
    } else {
        submit_bounded(submitter, &to_submit, requests, concurrency, limits.timeout).await
    };

    AutoSubmitOutcome { ranked, results }
}

/// One submission bounded by the per-item timeout.
async fn submit_one(
    submitter: &dyn ProposalSubmitter,
    request: &SubmitProposalRequest,
    timeout: Duration,
) -> Result<Proposal, SubmitError> {
    match tokio::time::timeout(timeout, submitter.submit(request)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(SubmitError::Timeout(timeout.as_secs())),
    }
}

fn record(matched: &ScoredMatch, outcome: Result<Proposal, SubmitError>) -> SubmissionRecord {
    match outcome {
        Ok(proposal) => SubmissionRecord {
            ok: true,
            job_id: matched.job.id,
            job_title: matched.job.title.clone(),
            proposal: Some(proposal),
            error: None,
        },
        Err(e) => {
            warn!(job_id = %matched.job.id, error = %e, "proposal submission failed");
            SubmissionRecord {
                ok: false,
                job_id: matched.job.id,
                job_title: matched.job.title.clone(),
                proposal: None,
                error: Some(e.to_string()),
            }
        }
    }
}

/// In-flight limit 1: each submission is awaited before the next starts.
async fn submit_sequentially(
    submitter: &dyn ProposalSubmitter,
    to_submit: &[ScoredMatch],
    requests: &[SubmitProposalRequest],
    timeout: Duration,
) -> Vec<SubmissionRecord> {
    let mut results = Vec::with_capacity(requests.len());
    for (matched, request) in to_submit.iter().zip(requests) {
        let outcome = submit_one(submitter, request, timeout).await;
        results.push(record(matched, outcome));
    }
    results
}

/// In-flight limit > 1: at most `concurrency` submissions run at once.
/// Outcomes are re-assembled by index so the result order stays ranked order.
async fn submit_bounded(
    submitter: Arc<dyn ProposalSubmitter>,
    to_submit: &[ScoredMatch],
    requests: Vec<SubmitProposalRequest>,
    concurrency: usize,
    timeout: Duration,
) -> Vec<SubmissionRecord> {
    let semaphore = Arc::new(Semaphore::new(concurrency));
    let mut tasks = JoinSet::new();

    for (index, request) in requests.into_iter().enumerate() {
        let submitter = Arc::clone(&submitter);
        let semaphore = Arc::clone(&semaphore);
        tasks.spawn(async move {
            // The semaphore is never closed while tasks hold it.
            let _permit = semaphore.acquire_owned().await.expect("semaphore closed");
            let outcome = match tokio::time::timeout(timeout, submitter.submit(&request)).await {
                Ok(outcome) => outcome,
                Err(_) => Err(SubmitError::Timeout(timeout.as_secs())),
            };
            (index, outcome)
        });
    }

    let mut outcomes: Vec<Option<Result<Proposal, SubmitError>>> =
        (0..to_submit.len()).map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, outcome)) => outcomes[index] = Some(outcome),
            Err(e) => warn!(error = %e, "submission task aborted"),
        }
    }

    to_submit
        .iter()
        .zip(outcomes)
        .map(|(matched, outcome)| record(matched, outcome.unwrap_or(Err(SubmitError::Aborted))))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

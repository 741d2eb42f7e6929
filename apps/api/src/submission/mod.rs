//! Proposal submission — the marketplace boundary and the auto-submit
//! orchestrator.
//!
//! ARCHITECTURAL RULE: no other module may talk to the marketplace API
//! directly. All outbound submissions go through the `ProposalSubmitter`
//! trait, carried in `AppState` as `Arc<dyn ProposalSubmitter>` so tests and
//! alternate backends swap in without touching handlers.

pub mod client;
pub mod handlers;
pub mod orchestrator;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::generation::tone::ProposalTone;
use crate::models::{Proposal, WorkSample};

/// Submission failure, collapsed to one enum at the boundary.
///
/// Failures are reported per item by the orchestrator and never retried.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Marketplace error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Submission timed out after {0}s")]
    Timeout(u64),

    #[error("Submission task aborted")]
    Aborted,
}

/// Wire payload for a single proposal submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitProposalRequest {
    pub job_id: Uuid,
    pub freelancer_id: Uuid,
    pub proposal_text: String,
    pub samples: Vec<WorkSample>,
    pub intro_type: ProposalTone,
}

/// The external proposal-submission collaborator.
#[async_trait]
pub trait ProposalSubmitter: Send + Sync {
    async fn submit(&self, request: &SubmitProposalRequest) -> Result<Proposal, SubmitError>;
}

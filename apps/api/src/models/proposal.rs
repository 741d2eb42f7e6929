use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state reported by the marketplace for a submitted proposal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    Submitted,
    Viewed,
    Accepted,
    Declined,
}

/// A portfolio sample attached to a proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSample {
    pub title: String,
    pub url: String,
}

/// The marketplace's receipt for a submitted proposal.
///
/// Produced by the external submission API; also recorded in the local
/// proposal store so the dashboard can list what was sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    pub id: Uuid,
    pub job_id: Uuid,
    pub freelancer_id: Uuid,
    pub cover_letter: String,
    pub status: ProposalStatus,
    pub submitted_at: DateTime<Utc>,
}

//! Marketplace client — the production `ProposalSubmitter`.
//!
//! Posts one proposal per call and maps transport, API, and parse failures
//! into `SubmitError`. Deliberately no retry loop: the orchestrator records
//! each failure and moves on, so a retry here would double-submit on slow
//! success paths.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::models::Proposal;
use crate::submission::{ProposalSubmitter, SubmitError, SubmitProposalRequest};

const PROPOSALS_PATH: &str = "/v1/proposals";

/// Error envelope the marketplace returns on non-2xx responses.
#[derive(Debug, Deserialize)]
struct MarketplaceError {
    error: MarketplaceErrorBody,
}

#[derive(Debug, Deserialize)]
struct MarketplaceErrorBody {
    message: String,
}

/// HTTPS client for the external proposal-submission API.
#[derive(Clone)]
pub struct MarketplaceClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl MarketplaceClient {
    pub fn new(base_url: String, api_key: String, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl ProposalSubmitter for MarketplaceClient {
    async fn submit(&self, request: &SubmitProposalRequest) -> Result<Proposal, SubmitError> {
        let url = format!("{}{}", self.base_url, PROPOSALS_PATH);

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        let proposal: Proposal = response.json().await?;
        debug!(
            proposal_id = %proposal.id,
            job_id = %proposal.job_id,
            "proposal accepted by marketplace"
        );
        Ok(proposal)
    }
}

/// Pulls the human-readable message out of the marketplace error envelope,
/// falling back to the raw body when it isn't the expected shape.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<MarketplaceError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}

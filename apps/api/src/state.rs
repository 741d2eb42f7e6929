use std::sync::Arc;

use crate::config::Config;
use crate::dashboard::store::Stores;
use crate::submission::ProposalSubmitter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable submission backend. Production: `MarketplaceClient`.
    pub submitter: Arc<dyn ProposalSubmitter>,
    /// Explicitly owned dashboard stores (in-memory; lost on restart).
    pub stores: Arc<Stores>,
}

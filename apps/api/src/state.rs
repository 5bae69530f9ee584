use std::sync::Arc;

use crate::config::Config;
use crate::matching::scorer::MatchScorer;
use crate::store::JobStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match scorer. Default: KeywordMatchScorer with configured weights.
    pub scorer: Arc<dyn MatchScorer>,
    /// Profile and job lookups. Default: PgJobStore.
    pub store: Arc<dyn JobStore>,
}

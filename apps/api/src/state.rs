use std::sync::Arc;

use crate::config::Config;
use crate::matching::JobScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable job scorer. Default: PreferenceScorer.
    pub scorer: Arc<dyn JobScorer>,
}

use std::sync::Arc;

use crate::config::Config;
use crate::matching::scoring::JobScorer;
use crate::store::{JobRepository, UserRepository};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<dyn JobRepository>,
    pub users: Arc<dyn UserRepository>,
    /// Pluggable job scorer. Default: WeightedJobScorer.
    pub scorer: Arc<dyn JobScorer>,
    pub config: Config,
}

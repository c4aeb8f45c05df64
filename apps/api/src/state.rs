use crate::allocation::scoring::ScoringWeights;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    /// Weights for the technician ranking score.
    pub weights: ScoringWeights,
}

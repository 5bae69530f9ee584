pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::readiness::handlers as readiness;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Match API
        .route("/api/v1/match", post(matching::handle_score_match))
        .route("/api/v1/match/weights", get(matching::handle_get_weights))
        .route("/api/v1/jobs/:id/match", get(matching::handle_job_match))
        // Interview readiness
        .route("/api/v1/readiness", post(readiness::handle_readiness))
        .with_state(state)
}

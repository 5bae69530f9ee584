use axum::Json;
use tracing::info;

use crate::readiness::scoring::{compute_readiness, ReadinessInput, ReadinessReport};

/// POST /api/v1/readiness
pub async fn handle_readiness(Json(input): Json<ReadinessInput>) -> Json<ReadinessReport> {
    let report = compute_readiness(&input);
    info!(
        "Readiness computed: {}% ({:?})",
        report.success_probability, report.tier
    );
    Json(report)
}

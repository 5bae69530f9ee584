//! Axum route handlers for the Match API.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::scorer::MatchResult;
use crate::matching::weights::MatchWeights;
use crate::models::job::JobPosting;
use crate::models::profile::Profile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub job: JobPosting,
    #[serde(default)]
    pub profile: Profile,
}

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JobMatchResponse {
    pub job_id: Uuid,
    pub result: MatchResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Scores an inline profile against an inline job posting. Never fails on content.
pub async fn handle_score_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Json<MatchResult> {
    let result = state.scorer.score(&request.job, &request.profile);
    info!(
        "Scored inline match for '{}': {}/100",
        request.job.job_title, result.overall_score
    );
    Json(result)
}

/// GET /api/v1/jobs/:id/match?user_id=
///
/// Loads the saved job and the user's profile, then scores them.
/// Malformed ids are reported in the JSON error envelope, not as plain-text rejections.
pub async fn handle_job_match(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    query: Result<Query<UserIdQuery>, QueryRejection>,
) -> Result<Json<JobMatchResponse>, AppError> {
    let Path(job_id) = path.map_err(|e| AppError::Validation(e.body_text()))?;
    let Query(params) = query.map_err(|e| AppError::Validation(e.body_text()))?;

    if params.user_id.is_nil() {
        return Err(AppError::Validation("user_id cannot be nil".to_string()));
    }

    let job = state
        .store
        .get_job(params.user_id, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let profile = state
        .store
        .get_profile(params.user_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Profile for user {} not found", params.user_id))
        })?;

    let result = state.scorer.score(&job, &profile);
    info!(
        "Scored job {job_id} for user {}: {}/100",
        params.user_id, result.overall_score
    );

    Ok(Json(JobMatchResponse { job_id, result }))
}

/// GET /api/v1/match/weights
///
/// Returns the sub-score weights the service was started with.
pub async fn handle_get_weights(State(state): State<AppState>) -> Json<MatchWeights> {
    Json(state.config.match_weights)
}

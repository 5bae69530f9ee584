//! Read-only access to candidate profiles and saved job postings.
//!
//! `AppState` carries an `Arc<dyn JobStore>`; production uses `PgJobStore`.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::models::profile::Profile;

#[async_trait]
pub trait JobStore: Send + Sync {
    /// Returns the user's profile, or `None` if they never created one.
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, AppError>;

    /// Returns the job only if it belongs to `user_id`.
    async fn get_job(&self, user_id: Uuid, job_id: Uuid) -> Result<Option<JobPosting>, AppError>;
}

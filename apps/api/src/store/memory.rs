use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::models::profile::Profile;
use crate::store::JobStore;

/// Fixed in-memory store for handler tests.
#[derive(Default)]
pub struct MemoryStore {
    pub profiles: HashMap<Uuid, Profile>,
    /// Keyed by (user_id, job_id).
    pub jobs: HashMap<(Uuid, Uuid), JobPosting>,
}

#[async_trait]
impl JobStore for MemoryStore {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, AppError> {
        Ok(self.profiles.get(&user_id).cloned())
    }

    async fn get_job(&self, user_id: Uuid, job_id: Uuid) -> Result<Option<JobPosting>, AppError> {
        Ok(self.jobs.get(&(user_id, job_id)).cloned())
    }
}

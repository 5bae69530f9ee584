use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobPosting, JobRow};
use crate::models::profile::{
    EducationRow, EmploymentRow, ExperienceLevel, Profile, ProfileRow, SkillRow,
};
use crate::store::JobStore;

/// `JobStore` over the tracker's PostgreSQL tables.
#[derive(Clone)]
pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, AppError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            "SELECT user_id, experience_level, location FROM profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            debug!("No profile for user {user_id}");
            return Ok(None);
        };

        let skills: Vec<SkillRow> = sqlx::query_as(
            "SELECT name, level FROM profile_skills WHERE user_id = $1 ORDER BY position, name",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let employment: Vec<EmploymentRow> = sqlx::query_as(
            r#"
            SELECT title, company, description
            FROM employment_history
            WHERE user_id = $1
            ORDER BY position
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let education: Vec<EducationRow> = sqlx::query_as(
            r#"
            SELECT degree, field, institution
            FROM education
            WHERE user_id = $1
            ORDER BY position
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        debug!(
            "Loaded profile for user {}: {} skills, {} jobs held, {} degrees",
            row.user_id,
            skills.len(),
            employment.len(),
            education.len()
        );

        Ok(Some(Profile {
            skills: skills.into_iter().map(Into::into).collect(),
            employment: employment.into_iter().map(Into::into).collect(),
            education: education.into_iter().map(Into::into).collect(),
            experience_level: row
                .experience_level
                .as_deref()
                .map(ExperienceLevel::parse_lenient)
                .unwrap_or_default(),
            location: row.location.unwrap_or_default(),
        }))
    }

    async fn get_job(&self, user_id: Uuid, job_id: Uuid) -> Result<Option<JobPosting>, AppError> {
        let row: Option<JobRow> = sqlx::query_as(
            r#"
            SELECT job_title, job_description, company_name, location
            FROM jobs
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(job_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        debug!("Job {job_id} lookup for user {user_id}: found={}", row.is_some());
        Ok(row.map(JobPosting::from))
    }
}

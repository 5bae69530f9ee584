use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The text fields of a target role that the match scorer reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPosting {
    pub job_title: String,
    pub job_description: String,
    pub company_name: String,
    pub location: String,
}

/// Text columns of a saved `jobs` row; any of them may be NULL.
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub job_title: Option<String>,
    pub job_description: Option<String>,
    pub company_name: Option<String>,
    pub location: Option<String>,
}

impl From<JobRow> for JobPosting {
    fn from(row: JobRow) -> Self {
        JobPosting {
            job_title: row.job_title.unwrap_or_default(),
            job_description: row.job_description.unwrap_or_default(),
            company_name: row.company_name.unwrap_or_default(),
            location: row.location.unwrap_or_default(),
        }
    }
}

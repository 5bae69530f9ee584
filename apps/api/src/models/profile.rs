use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Parses a stored level, falling back to the default for unknown values.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "beginner" => SkillLevel::Beginner,
            "intermediate" => SkillLevel::Intermediate,
            "advanced" => SkillLevel::Advanced,
            "expert" => SkillLevel::Expert,
            _ => SkillLevel::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    #[default]
    Mid,
    Senior,
    Lead,
    Executive,
}

impl ExperienceLevel {
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "entry" => ExperienceLevel::Entry,
            "mid" => ExperienceLevel::Mid,
            "senior" => ExperienceLevel::Senior,
            "lead" => ExperienceLevel::Lead,
            "executive" => ExperienceLevel::Executive,
            _ => ExperienceLevel::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmploymentEntry {
    pub title: String,
    pub company: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub field: String,
    pub institution: String,
}

/// A candidate's stored profile, as consumed by the match scorer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub skills: Vec<Skill>,
    pub employment: Vec<EmploymentEntry>,
    pub education: Vec<EducationEntry>,
    pub experience_level: ExperienceLevel,
    pub location: String,
}

// Row types mirror the tables the store reads; text columns are nullable.

#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub user_id: Uuid,
    pub experience_level: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct SkillRow {
    pub name: String,
    pub level: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct EmploymentRow {
    pub title: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct EducationRow {
    pub degree: Option<String>,
    pub field: Option<String>,
    pub institution: Option<String>,
}

impl From<SkillRow> for Skill {
    fn from(row: SkillRow) -> Self {
        Skill {
            name: row.name,
            level: row
                .level
                .as_deref()
                .map(SkillLevel::parse_lenient)
                .unwrap_or_default(),
        }
    }
}

impl From<EmploymentRow> for EmploymentEntry {
    fn from(row: EmploymentRow) -> Self {
        EmploymentEntry {
            title: row.title.unwrap_or_default(),
            company: row.company.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
        }
    }
}

impl From<EducationRow> for EducationEntry {
    fn from(row: EducationRow) -> Self {
        EducationEntry {
            degree: row.degree.unwrap_or_default(),
            field: row.field.unwrap_or_default(),
            institution: row.institution.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_level_serde_snake_case() {
        let level: SkillLevel = serde_json::from_str(r#""expert""#).unwrap();
        assert_eq!(level, SkillLevel::Expert);
        assert_eq!(
            serde_json::to_string(&SkillLevel::Advanced).unwrap(),
            r#""advanced""#
        );
    }

    #[test]
    fn test_unknown_levels_fall_back_to_default() {
        assert_eq!(SkillLevel::parse_lenient("guru"), SkillLevel::Intermediate);
        assert_eq!(ExperienceLevel::parse_lenient(""), ExperienceLevel::Mid);
        assert_eq!(
            ExperienceLevel::parse_lenient(" Senior "),
            ExperienceLevel::Senior
        );
    }

    #[test]
    fn test_profile_missing_fields_deserialize_to_defaults() {
        let profile: Profile = serde_json::from_str(r#"{"skills": [{"name": "Rust"}]}"#).unwrap();
        assert_eq!(profile.skills.len(), 1);
        assert_eq!(profile.skills[0].level, SkillLevel::Intermediate);
        assert!(profile.location.is_empty());
        assert!(profile.education.is_empty());
        assert_eq!(profile.experience_level, ExperienceLevel::Mid);
    }

    #[test]
    fn test_skill_row_with_null_level_uses_default() {
        let skill: Skill = SkillRow {
            name: "Go".to_string(),
            level: None,
        }
        .into();
        assert_eq!(skill.level, SkillLevel::Intermediate);
    }
}

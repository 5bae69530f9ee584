use serde::{Deserialize, Serialize};

use crate::models::profile::SkillLevel;

/// Sub-score at or above which a dimension is reported as a strength,
/// and overall score at or above which the match is "strong".
pub const STRONG_THRESHOLD: u32 = 80;
/// Overall score at or above which the match is "moderate".
pub const MODERATE_THRESHOLD: u32 = 50;

/// Points a single matched skill contributes before its level multiplier.
pub const SKILL_MATCH_POINTS: f64 = 40.0;
pub const MAX_SUB_SCORE: f64 = 100.0;

pub const EXPERIENCE_BASELINE: f64 = 50.0;
pub const EDUCATION_BASELINE: f64 = 60.0;

pub const SKILLS_WEIGHT: f64 = 0.45;
pub const EXPERIENCE_WEIGHT: f64 = 0.25;
pub const EDUCATION_WEIGHT: f64 = 0.10;
pub const LOCATION_WEIGHT: f64 = 0.20;

pub fn level_multiplier(level: SkillLevel) -> f64 {
    match level {
        SkillLevel::Expert => 1.0,
        SkillLevel::Advanced => 0.8,
        SkillLevel::Intermediate => 0.6,
        SkillLevel::Beginner => 0.4,
    }
}

/// Relative weight of each sub-score in the overall match score. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub location: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: SKILLS_WEIGHT,
            experience: EXPERIENCE_WEIGHT,
            education: EDUCATION_WEIGHT,
            location: LOCATION_WEIGHT,
        }
    }
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.education + self.location
    }

    pub fn validate(&self) -> Result<(), String> {
        for (name, w) in [
            ("skills", self.skills),
            ("experience", self.experience),
            ("education", self.education),
            ("location", self.location),
        ] {
            if !w.is_finite() || w < 0.0 {
                return Err(format!("{name} weight must be a non-negative number, got {w}"));
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(format!("match weights must sum to 1.0, got {sum}"));
        }
        Ok(())
    }

    /// Weighted sum of the four sub-scores, rounded and clamped to 0–100.
    pub fn combine(&self, skills: u32, experience: u32, education: u32, location: u32) -> u32 {
        let raw = self.skills * skills as f64
            + self.experience * experience as f64
            + self.education * education as f64
            + self.location * location as f64;
        raw.round().clamp(0.0, MAX_SUB_SCORE) as u32
    }
}

//! Match scoring: weighted compatibility of a candidate profile against a job posting.
//!
//! `KeywordMatchScorer` is the only backend: pure, deterministic, no I/O.
//! `AppState` holds an `Arc<dyn MatchScorer>` so handlers never name the concrete type.

use serde::{Deserialize, Serialize};

use crate::matching::keywords::{contains_word, mentioned_skills, tokenize};
use crate::matching::weights::{
    level_multiplier, MatchWeights, EDUCATION_BASELINE, EXPERIENCE_BASELINE, MAX_SUB_SCORE,
    MODERATE_THRESHOLD, SKILL_MATCH_POINTS, STRONG_THRESHOLD,
};
use crate::models::job::JobPosting;
use crate::models::profile::{ExperienceLevel, Profile};

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills_score: u32,
    pub experience_score: u32,
    pub education_score: u32,
    pub location_score: u32,
}

/// A skill the posting asks for that the profile does not list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    pub skill: String,
    pub reason: String,
}

/// Full result of one scoring call. Recomputed every time, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub overall_score: u32, // 0 – 100
    pub breakdown: ScoreBreakdown,
    pub matched_skills: Vec<String>,
    pub strengths: Vec<String>,
    pub gaps: Vec<Gap>,
    pub recommendations: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores a profile against a posting. Implementations must be total: every
/// input yields a result with all scores inside 0–100.
pub trait MatchScorer: Send + Sync {
    fn score(&self, job: &JobPosting, profile: &Profile) -> MatchResult;
}

/// Substring and keyword based scorer with configurable sub-score weights.
#[derive(Debug, Clone, Default)]
pub struct KeywordMatchScorer {
    weights: MatchWeights,
}

impl KeywordMatchScorer {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }
}

impl MatchScorer for KeywordMatchScorer {
    fn score(&self, job: &JobPosting, profile: &Profile) -> MatchResult {
        score_match(job, profile, &self.weights)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

pub const STRENGTH_SKILLS: &str = "Strong skills alignment";
pub const STRENGTH_EXPERIENCE: &str = "Experience level match";
pub const STRENGTH_EDUCATION: &str = "Relevant education";
pub const STRENGTH_LOCATION: &str = "Location match";

const GAP_REASON: &str = "Mentioned in the job posting but not listed in your skills";
const GAP_RECOMMENDATION_LIMIT: usize = 3;
/// Shortest matched skill name that may cover a longer vocabulary term.
const MIN_PREFIX_LEN: usize = 2;

/// Scores `profile` against `job` with the given weights.
///
/// Algorithm:
/// 1. skills: each profile skill found in title + description adds
///    `SKILL_MATCH_POINTS × level multiplier`, capped at 100
/// 2. experience: a level term present as a word in the posting → 100, else baseline
/// 3. education: a degree or field present in the description → 100, else baseline
/// 4. location: equal or contained (either way) → 100, else 0
/// 5. overall = weighted sum, rounded and clamped
///
/// A blank description skips steps 1–3, leaving skills at 0 and the rest at baseline.
pub fn score_match(job: &JobPosting, profile: &Profile, weights: &MatchWeights) -> MatchResult {
    let has_description = !job.job_description.trim().is_empty();

    let (skills_score, matched_skills) = if has_description {
        score_skills(job, profile)
    } else {
        (0, Vec::new())
    };
    let experience_score = if has_description {
        score_experience(job, profile.experience_level)
    } else {
        EXPERIENCE_BASELINE as u32
    };
    let education_score = if has_description {
        score_education(job, profile)
    } else {
        EDUCATION_BASELINE as u32
    };
    let location_score = score_location(&job.location, &profile.location);

    let breakdown = ScoreBreakdown {
        skills_score,
        experience_score,
        education_score,
        location_score,
    };
    let overall_score = weights.combine(
        skills_score,
        experience_score,
        education_score,
        location_score,
    );

    let strengths = build_strengths(&breakdown);
    let gaps = find_gaps(job, profile, &matched_skills);
    let recommendations =
        build_recommendations(overall_score, &breakdown, &matched_skills, &gaps, job);

    MatchResult {
        overall_score,
        breakdown,
        matched_skills,
        strengths,
        gaps,
        recommendations,
    }
}

fn score_skills(job: &JobPosting, profile: &Profile) -> (u32, Vec<String>) {
    let haystack = format!("{} {}", job.job_title, job.job_description).to_lowercase();

    let mut points = 0.0_f64;
    let mut matched = Vec::new();
    for skill in &profile.skills {
        let needle = skill.name.trim().to_lowercase();
        if needle.is_empty() || !haystack.contains(&needle) {
            continue;
        }
        points += SKILL_MATCH_POINTS * level_multiplier(skill.level);
        matched.push(skill.name.trim().to_string());
    }

    (to_sub_score(points), matched)
}

fn experience_terms(level: ExperienceLevel) -> &'static [&'static str] {
    match level {
        ExperienceLevel::Entry => &["entry", "junior", "graduate", "intern"],
        ExperienceLevel::Mid => &["mid", "intermediate"],
        ExperienceLevel::Senior => &["senior", "sr"],
        ExperienceLevel::Lead => &["lead", "principal", "staff"],
        ExperienceLevel::Executive => &["director", "head", "vp", "chief"],
    }
}

fn score_experience(job: &JobPosting, level: ExperienceLevel) -> u32 {
    let text = format!("{} {}", job.job_title, job.job_description);
    let matched = experience_terms(level)
        .iter()
        .any(|term| contains_word(&text, term));

    if matched {
        MAX_SUB_SCORE as u32
    } else {
        EXPERIENCE_BASELINE as u32
    }
}

fn score_education(job: &JobPosting, profile: &Profile) -> u32 {
    let description = job.job_description.to_lowercase();
    let matched = profile
        .education
        .iter()
        .flat_map(|e| [e.degree.as_str(), e.field.as_str()])
        .map(|kw| kw.trim().to_lowercase())
        .any(|kw| !kw.is_empty() && description.contains(&kw));

    if matched {
        MAX_SUB_SCORE as u32
    } else {
        EDUCATION_BASELINE as u32
    }
}

/// Binary location match. Either side missing counts as no match.
pub fn score_location(job_location: &str, profile_location: &str) -> u32 {
    let job_loc = job_location.trim().to_lowercase();
    let profile_loc = profile_location.trim().to_lowercase();
    if job_loc.is_empty() || profile_loc.is_empty() {
        return 0;
    }

    if job_loc.contains(&profile_loc) || profile_loc.contains(&job_loc) {
        MAX_SUB_SCORE as u32
    } else {
        0
    }
}

fn to_sub_score(points: f64) -> u32 {
    points.round().clamp(0.0, MAX_SUB_SCORE) as u32
}

fn build_strengths(breakdown: &ScoreBreakdown) -> Vec<String> {
    [
        (breakdown.skills_score, STRENGTH_SKILLS),
        (breakdown.experience_score, STRENGTH_EXPERIENCE),
        (breakdown.education_score, STRENGTH_EDUCATION),
        (breakdown.location_score, STRENGTH_LOCATION),
    ]
    .into_iter()
    .filter(|(score, _)| *score >= STRONG_THRESHOLD)
    .map(|(_, label)| label.to_string())
    .collect()
}

/// Vocabulary skills the posting mentions that the profile does not already cover.
fn find_gaps(job: &JobPosting, profile: &Profile, matched_skills: &[String]) -> Vec<Gap> {
    let text = format!("{} {}", job.job_title, job.job_description);
    let owned: Vec<String> = profile
        .skills
        .iter()
        .map(|s| s.name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect();
    let matched: Vec<String> = matched_skills.iter().map(|s| s.to_lowercase()).collect();

    mentioned_skills(&text)
        .into_iter()
        .filter(|term| !is_covered(term, &owned, &matched))
        .map(|term| Gap {
            skill: term.to_string(),
            reason: GAP_REASON.to_string(),
        })
        .collect()
}

/// A term is covered when it is, or is part of, a listed skill name, or when it
/// extends a skill that already matched the posting ("postgres" for "postgresql").
fn is_covered(term: &str, owned: &[String], matched: &[String]) -> bool {
    let part_of_owned = owned.iter().any(|name| {
        if term.contains(' ') {
            name.contains(term)
        } else {
            tokenize(name).iter().any(|t| t == term)
        }
    });
    let extends_matched = matched
        .iter()
        .any(|name| name.len() >= MIN_PREFIX_LEN && term.starts_with(name.as_str()));

    part_of_owned || extends_matched
}

/// One primary tier from the overall score, then per-gap and location follow-ups.
fn build_recommendations(
    overall_score: u32,
    breakdown: &ScoreBreakdown,
    matched_skills: &[String],
    gaps: &[Gap],
    job: &JobPosting,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    let primary = if overall_score >= STRONG_THRESHOLD {
        let highlight = if matched_skills.is_empty() {
            "your relevant experience".to_string()
        } else {
            matched_skills.join(", ")
        };
        format!("Strong match: tailor your resume to highlight {highlight}.")
    } else if overall_score >= MODERATE_THRESHOLD {
        format!("Moderate match ({overall_score}/100): address the gaps below before applying.")
    } else {
        format!("Significant gaps ({overall_score}/100): consider upskilling before applying.")
    };
    recommendations.push(primary);

    recommendations.extend(
        gaps.iter()
            .take(GAP_RECOMMENDATION_LIMIT)
            .map(|g| format!("Build experience with {}.", g.skill)),
    );

    if breakdown.location_score == 0 && !job.location.trim().is_empty() {
        recommendations.push(format!(
            "Confirm relocation or remote options for {}.",
            job.location.trim()
        ));
    }

    recommendations
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

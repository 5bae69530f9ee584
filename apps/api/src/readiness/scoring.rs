//! Interview readiness: weighted preparation factors combined into a success probability.

use serde::{Deserialize, Serialize};

/// Preparation state for one upcoming interview. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadinessInput {
    /// Overall match score for the job, 0 – 100. Larger values are clamped.
    pub match_score: u32,
    pub company_research: bool,
    pub mock_interviews: u32,
    pub star_stories: u32,
    pub prepared_questions: u32,
    pub follow_up_planned: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessFactor {
    MatchScore,
    CompanyResearch,
    MockInterviews,
    StarStories,
    PreparedQuestions,
    FollowUpPlan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessTier {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor: ReadinessFactor,
    pub score: u32,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub success_probability: u32,
    pub tier: ReadinessTier,
    pub factors: Vec<FactorScore>,
    pub suggestions: Vec<String>,
}

const FACTOR_WEIGHTS: &[(ReadinessFactor, f64)] = &[
    (ReadinessFactor::MatchScore, 0.35),
    (ReadinessFactor::CompanyResearch, 0.15),
    (ReadinessFactor::MockInterviews, 0.20),
    (ReadinessFactor::StarStories, 0.15),
    (ReadinessFactor::PreparedQuestions, 0.10),
    (ReadinessFactor::FollowUpPlan, 0.05),
];

pub const MOCK_INTERVIEW_TARGET: u32 = 3;
pub const STAR_STORY_TARGET: u32 = 5;
pub const QUESTION_TARGET: u32 = 3;

pub const HIGH_READINESS_THRESHOLD: u32 = 75;
pub const MEDIUM_READINESS_THRESHOLD: u32 = 50;

pub fn compute_readiness(input: &ReadinessInput) -> ReadinessReport {
    let mut factors = Vec::with_capacity(FACTOR_WEIGHTS.len());
    let mut suggestions = Vec::new();
    let mut weighted_sum = 0.0;

    for &(factor, weight) in FACTOR_WEIGHTS {
        let score = factor_score(factor, input);
        weighted_sum += weight * score as f64;
        if score < 100 {
            suggestions.push(suggestion(factor, input));
        }
        factors.push(FactorScore {
            factor,
            score,
            weight,
        });
    }

    let success_probability = weighted_sum.round().clamp(0.0, 100.0) as u32;

    ReadinessReport {
        success_probability,
        tier: tier_for(success_probability),
        factors,
        suggestions,
    }
}

fn factor_score(factor: ReadinessFactor, input: &ReadinessInput) -> u32 {
    match factor {
        ReadinessFactor::MatchScore => input.match_score.min(100),
        ReadinessFactor::CompanyResearch => flag_score(input.company_research),
        ReadinessFactor::MockInterviews => ratio_score(input.mock_interviews, MOCK_INTERVIEW_TARGET),
        ReadinessFactor::StarStories => ratio_score(input.star_stories, STAR_STORY_TARGET),
        ReadinessFactor::PreparedQuestions => {
            ratio_score(input.prepared_questions, QUESTION_TARGET)
        }
        ReadinessFactor::FollowUpPlan => flag_score(input.follow_up_planned),
    }
}

fn flag_score(done: bool) -> u32 {
    if done {
        100
    } else {
        0
    }
}

/// Progress toward `target`, as a 0 – 100 score.
fn ratio_score(count: u32, target: u32) -> u32 {
    if target == 0 {
        return 100;
    }
    ((count.min(target) as f64 / target as f64) * 100.0).round() as u32
}

fn tier_for(probability: u32) -> ReadinessTier {
    if probability >= HIGH_READINESS_THRESHOLD {
        ReadinessTier::High
    } else if probability >= MEDIUM_READINESS_THRESHOLD {
        ReadinessTier::Medium
    } else {
        ReadinessTier::Low
    }
}

fn suggestion(factor: ReadinessFactor, input: &ReadinessInput) -> String {
    match factor {
        ReadinessFactor::MatchScore => {
            "Close the skill gaps flagged in the job match before the interview.".to_string()
        }
        ReadinessFactor::CompanyResearch => {
            "Research the company's products, culture and recent news.".to_string()
        }
        ReadinessFactor::MockInterviews => format!(
            "Run {} more mock interview(s).",
            MOCK_INTERVIEW_TARGET - input.mock_interviews.min(MOCK_INTERVIEW_TARGET)
        ),
        ReadinessFactor::StarStories => format!(
            "Prepare {} more STAR stories from your experience.",
            STAR_STORY_TARGET - input.star_stories.min(STAR_STORY_TARGET)
        ),
        ReadinessFactor::PreparedQuestions => format!(
            "Write {} more questions to ask the interviewer.",
            QUESTION_TARGET - input.prepared_questions.min(QUESTION_TARGET)
        ),
        ReadinessFactor::FollowUpPlan => {
            "Plan a thank-you note to send within a day of the interview.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fully_prepared() -> ReadinessInput {
        ReadinessInput {
            match_score: 100,
            company_research: true,
            mock_interviews: 3,
            star_stories: 5,
            prepared_questions: 3,
            follow_up_planned: true,
        }
    }

    #[test]
    fn test_factor_weights_sum_to_one() {
        let sum: f64 = FACTOR_WEIGHTS.iter().map(|(_, w)| w).sum();
        assert!((sum - 1.0).abs() < 1e-9, "sum was {sum}");
    }

    #[test]
    fn test_fully_prepared_is_high() {
        let report = compute_readiness(&fully_prepared());
        assert_eq!(report.success_probability, 100);
        assert_eq!(report.tier, ReadinessTier::High);
        assert!(report.suggestions.is_empty());
        assert_eq!(report.factors.len(), 6);
    }

    #[test]
    fn test_default_input_is_low_with_all_suggestions() {
        let report = compute_readiness(&ReadinessInput::default());
        assert_eq!(report.success_probability, 0);
        assert_eq!(report.tier, ReadinessTier::Low);
        assert_eq!(report.suggestions.len(), 6);
        assert!(report.suggestions[2].contains("3 more mock"));
    }

    #[test]
    fn test_counts_beyond_target_do_not_overflow_score() {
        let input = ReadinessInput {
            match_score: 250,
            mock_interviews: 40,
            ..fully_prepared()
        };
        let report = compute_readiness(&input);
        assert_eq!(report.success_probability, 100);
        assert!(report.factors.iter().all(|f| f.score <= 100));
    }

    #[test]
    fn test_partial_preparation_is_medium() {
        // 0.35*70 + 0.15*100 + 0.20*33 + 0.15*60 + 0.10*0 + 0.05*0
        // = 24.5 + 15 + 6.6 + 9 = 55.1 -> 55
        let input = ReadinessInput {
            match_score: 70,
            company_research: true,
            mock_interviews: 1,
            star_stories: 3,
            prepared_questions: 0,
            follow_up_planned: false,
        };
        let report = compute_readiness(&input);
        assert_eq!(report.success_probability, 55);
        assert_eq!(report.tier, ReadinessTier::Medium);
        assert_eq!(report.suggestions.len(), 5);
        assert!(report.suggestions.iter().any(|s| s.contains("2 more STAR")));
    }

    #[test]
    fn test_ratio_score_rounds() {
        assert_eq!(ratio_score(1, 3), 33);
        assert_eq!(ratio_score(2, 3), 67);
        assert_eq!(ratio_score(9, 3), 100);
        assert_eq!(ratio_score(0, 0), 100);
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(tier_for(75), ReadinessTier::High);
        assert_eq!(tier_for(74), ReadinessTier::Medium);
        assert_eq!(tier_for(50), ReadinessTier::Medium);
        assert_eq!(tier_for(49), ReadinessTier::Low);
    }

    #[test]
    fn test_tier_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ReadinessTier::High).unwrap(),
            r#""high""#
        );
        assert_eq!(
            serde_json::to_string(&ReadinessFactor::StarStories).unwrap(),
            r#""star_stories""#
        );
    }
}

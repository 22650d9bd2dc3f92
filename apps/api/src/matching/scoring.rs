//! Scoring Engine: weighted, deterministic match score between a profile and one job.
//!
//! Default: `WeightedJobScorer` (skills 60, experience 30, location 10).
//!
//! `AppState` holds an `Arc<dyn JobScorer>`, chosen at startup.

use serde::{Deserialize, Serialize};

use crate::matching::profile::Profile;
use crate::matching::skills::normalize_skills;
use crate::models::job::JobRow;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// One ranked job, as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub job_id: i64,
    pub title: String,
    pub company: String,
    pub match_score: u32, // 0 – 100
    pub reason: String,
}

/// Per-factor contributions before rounding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub matched_skills: Vec<String>,
    pub skill_score: f64,
    pub experience_score: f64,
    pub location_score: f64,
    pub meets_experience: bool,
    pub location_matches: bool,
}

impl ScoreBreakdown {
    /// Rounded total, half away from zero.
    pub fn total(&self) -> u32 {
        (self.skill_score + self.experience_score + self.location_score)
            .round()
            .clamp(0.0, 100.0) as u32
    }
}

/// Maximum points per factor. The defaults sum to 100.
#[derive(Debug, Clone)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 60.0,
            experience: 30.0,
            location: 10.0,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores a single job for a profile. Implementations must be pure: the same
/// inputs always yield the same recommendation.
pub trait JobScorer: Send + Sync {
    fn score(&self, profile: &Profile, job: &JobRow) -> Recommendation;

    /// Short backend label, logged by the ranker.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedJobScorer (default)
// ────────────────────────────────────────────────────────────────────────────

/// Algorithm:
/// 1. skills: |profile skills found in job skills| / |job skill tokens| × weight
///    (0 when the job lists no skills)
/// 2. experience: full weight when met, otherwise proportional
/// 3. location: full weight on case-insensitive equality, otherwise 0
/// 4. total = round(sum)
#[derive(Debug, Clone, Default)]
pub struct WeightedJobScorer {
    pub weights: ScoringWeights,
}

impl JobScorer for WeightedJobScorer {
    fn score(&self, profile: &Profile, job: &JobRow) -> Recommendation {
        let breakdown = score_breakdown(profile, job, &self.weights);
        Recommendation {
            job_id: job.id,
            title: job.title.clone(),
            company: job.company.clone(),
            match_score: breakdown.total(),
            reason: build_reason(&breakdown),
        }
    }

    fn backend(&self) -> &'static str {
        "weighted"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

pub fn score_breakdown(profile: &Profile, job: &JobRow, weights: &ScoringWeights) -> ScoreBreakdown {
    let job_skills = normalize_skills(&job.required_skills);

    let matched_skills: Vec<String> = profile
        .skills
        .iter()
        .filter(|s| job_skills.contains(s))
        .cloned()
        .collect();

    let skill_score = if job_skills.is_empty() {
        0.0
    } else {
        matched_skills.len() as f64 / job_skills.len() as f64 * weights.skills
    };

    // Negative requirements are rejected by the ranker; clamp for direct callers.
    let required = job.experience_required.max(0) as u32;
    let meets_experience = profile.experience >= required;
    let experience_score = if meets_experience {
        weights.experience
    } else {
        profile.experience as f64 / required as f64 * weights.experience
    };

    let location_matches = profile.location.to_lowercase() == job.location.to_lowercase();
    let location_score = if location_matches {
        weights.location
    } else {
        0.0
    };

    ScoreBreakdown {
        matched_skills,
        skill_score,
        experience_score,
        location_score,
        meets_experience,
        location_matches,
    }
}

/// Three independent clauses, always in the order skills, experience, location.
fn build_reason(breakdown: &ScoreBreakdown) -> String {
    let mut reason = String::new();

    if breakdown.matched_skills.is_empty() {
        reason.push_str("Some of your skills may partially match this job. ");
    } else {
        reason.push_str(&format!(
            "Your skills ({}) match this job. ",
            breakdown.matched_skills.join(", ")
        ));
    }

    if breakdown.meets_experience {
        reason.push_str("You meet the experience requirement. ");
    } else {
        reason.push_str("You are slightly below the experience requirement. ");
    }

    if breakdown.location_matches {
        reason.push_str("Location is a perfect match.");
    } else {
        reason.push_str("Location is different but still eligible.");
    }

    reason
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_job;

    fn profile(skills: &str, experience: u32, location: &str) -> Profile {
        Profile::new(skills, experience, location).unwrap()
    }

    fn score(p: &Profile, job: &JobRow) -> Recommendation {
        WeightedJobScorer::default().score(p, job)
    }

    #[test]
    fn test_worked_example_scores_80() {
        let p = profile("python, sql", 3, "Remote");
        let job = test_job(1, "python, sql, aws", 2, "remote");

        let breakdown = score_breakdown(&p, &job, &ScoringWeights::default());
        assert!((breakdown.skill_score - 40.0).abs() < 1e-9);
        assert_eq!(breakdown.experience_score, 30.0);
        assert_eq!(breakdown.location_score, 10.0);

        let rec = score(&p, &job);
        assert_eq!(rec.match_score, 80);
        assert_eq!(rec.job_id, 1);
        assert_eq!(rec.title, "Job 1");
        assert_eq!(rec.company, "Acme");
    }

    #[test]
    fn test_all_factors_maximal_scores_100() {
        let p = profile("Rust, Go", 10, "Berlin");
        let job = test_job(2, "go, rust", 5, "BERLIN");
        assert_eq!(score(&p, &job).match_score, 100);
    }

    #[test]
    fn test_only_experience_fraction_contributes() {
        // 0 skills, 1/3 of experience, location differs → round(10.0)
        let p = profile("cobol", 1, "Paris");
        let job = test_job(3, "rust, go", 3, "Berlin");
        assert_eq!(score(&p, &job).match_score, 10);

        // 2/7 × 30 = 8.57 → 9
        let p = profile("cobol", 2, "Paris");
        let job = test_job(4, "rust", 7, "Berlin");
        assert_eq!(score(&p, &job).match_score, 9);
    }

    #[test]
    fn test_job_without_skills_uses_zero_skill_score() {
        let p = profile("rust", 3, "Remote");
        let job = test_job(5, " , ", 1, "remote");
        let breakdown = score_breakdown(&p, &job, &ScoringWeights::default());
        assert_eq!(breakdown.skill_score, 0.0);
        assert!(!breakdown.skill_score.is_nan());
        assert_eq!(score(&p, &job).match_score, 40);
    }

    #[test]
    fn test_zero_required_experience_with_zero_experience_is_met() {
        let p = profile("rust", 0, "Remote");
        let job = test_job(6, "rust", 0, "remote");
        let breakdown = score_breakdown(&p, &job, &ScoringWeights::default());
        assert!(breakdown.meets_experience);
        assert_eq!(breakdown.experience_score, 30.0);
    }

    #[test]
    fn test_duplicate_job_skills_count_in_denominator() {
        // "rust, rust, go" has 3 tokens; profile matches rust once → 1/3 × 60 = 20
        let p = profile("rust", 5, "x");
        let job = test_job(7, "rust, rust, go", 1, "y");
        let breakdown = score_breakdown(&p, &job, &ScoringWeights::default());
        assert!((breakdown.skill_score - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_bounded_0_to_100() {
        let jobs = [
            test_job(1, "rust", 0, "a"),
            test_job(2, "rust, rust", 100, "b"),
            test_job(3, "go", 1, "A"),
            test_job(4, "", 0, ""),
        ];
        for skills in ["rust", "rust, go, sql", "java"] {
            for exp in [0, 1, 50, 1000] {
                let p = profile(skills, exp, "a");
                for job in &jobs {
                    assert!(score(&p, job).match_score <= 100);
                }
            }
        }
    }

    #[test]
    fn test_location_requires_exact_case_insensitive_equality() {
        let p = profile("rust", 1, "New York");
        assert!(score_breakdown(&p, &test_job(1, "rust", 1, "new york"), &ScoringWeights::default())
            .location_matches);
        assert!(!score_breakdown(&p, &test_job(1, "rust", 1, "New York "), &ScoringWeights::default())
            .location_matches);
        assert!(!score_breakdown(&p, &test_job(1, "rust", 1, "NYC"), &ScoringWeights::default())
            .location_matches);
    }

    #[test]
    fn test_location_whitespace_is_compared_as_supplied() {
        let p = profile("rust", 1, " Remote");
        let weights = ScoringWeights::default();
        assert!(score_breakdown(&p, &test_job(1, "rust", 1, " remote"), &weights).location_matches);
        assert!(!score_breakdown(&p, &test_job(2, "rust", 1, "remote"), &weights).location_matches);
    }

    #[test]
    fn test_reason_lists_matched_skills_in_profile_order() {
        let p = profile("SQL, Python, Java", 3, "Remote");
        let rec = score(&p, &test_job(1, "python, sql", 2, "remote"));
        assert_eq!(
            rec.reason,
            "Your skills (sql, python) match this job. You meet the experience requirement. Location is a perfect match."
        );
    }

    #[test]
    fn test_reason_fallback_clauses() {
        let p = profile("cobol", 1, "Paris");
        let rec = score(&p, &test_job(1, "rust", 10, "Berlin"));
        assert_eq!(
            rec.reason,
            "Some of your skills may partially match this job. You are slightly below the experience requirement. Location is different but still eligible."
        );
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let p = profile("python, sql", 3, "Remote");
        let job = test_job(1, "python, sql, aws", 4, "Remote");
        assert_eq!(score(&p, &job), score(&p, &job));
    }

    #[test]
    fn test_backend_label_is_weighted() {
        assert_eq!(WeightedJobScorer::default().backend(), "weighted");
    }
}

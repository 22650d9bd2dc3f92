//! Recommendation Ranker: scores a batch of jobs and keeps the best `top_n`.

use tracing::debug;

use crate::matching::profile::Profile;
use crate::matching::scoring::{JobScorer, Recommendation};
use crate::matching::MatchError;
use crate::models::job::JobRow;

/// Ranks `jobs` for `profile`, best first.
///
/// The whole batch is validated before any job is scored. Ties keep the order
/// in which jobs were supplied (the sort is stable).
pub fn rank(
    scorer: &dyn JobScorer,
    profile: &Profile,
    jobs: &[JobRow],
    top_n: usize,
) -> Result<Vec<Recommendation>, MatchError> {
    validate_jobs(jobs)?;

    let mut recommendations: Vec<Recommendation> =
        jobs.iter().map(|job| scorer.score(profile, job)).collect();

    recommendations.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    recommendations.truncate(top_n);

    debug!(
        backend = scorer.backend(),
        scored = jobs.len(),
        returned = recommendations.len(),
        "Ranked jobs"
    );

    Ok(recommendations)
}

fn validate_jobs(jobs: &[JobRow]) -> Result<(), MatchError> {
    match jobs.iter().find(|job| job.experience_required < 0) {
        Some(job) => Err(MatchError::InvalidJob {
            job_id: job.id,
            reason: format!(
                "experience_required must be non-negative, got {}",
                job.experience_required
            ),
        }),
        None => Ok(()),
    }
}

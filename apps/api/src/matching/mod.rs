// Job matching core: skill normalization, weighted scoring, ranking and the
// criteria filter behind the match endpoints.
// Everything here except `handlers` is synchronous and performs no I/O.

pub mod criteria;
pub mod handlers;
pub mod profile;
pub mod ranker;
pub mod scoring;
pub mod skills;

use thiserror::Error;

/// Input rejected by the matching core before any job is scored.
#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Invalid job {job_id}: {reason}")]
    InvalidJob { job_id: i64, reason: String },
}

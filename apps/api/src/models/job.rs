use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A persisted job posting. `required_skills` is the raw comma-separated list
/// exactly as it was submitted.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct JobRow {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub required_skills: String,
    pub experience_required: i32,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub required_skills: String,
    pub experience_required: i32,
    pub location: String,
}

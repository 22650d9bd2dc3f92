//! Axum route handlers for job postings.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::job::{JobRow, NewJob};
use crate::state::AppState;
use crate::validation::{non_negative, require_field};

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub required_skills: Option<String>,
    pub experience_required: Option<i32>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateJobResponse {
    pub id: i64,
    pub message: String,
}

/// POST /jobs
///
/// `experience_required` defaults to 0 when omitted.
pub async fn handle_create_job(
    State(state): State<AppState>,
    payload: Result<Json<CreateJobRequest>, JsonRejection>,
) -> Result<Json<CreateJobResponse>, AppError> {
    let Json(request) = payload?;
    let job = NewJob {
        title: require_field(request.title, "title")?,
        company: require_field(request.company, "company")?,
        required_skills: require_field(request.required_skills, "required_skills")?,
        experience_required: non_negative(
            request.experience_required.unwrap_or(0),
            "experience_required",
        )?,
        location: require_field(request.location, "location")?,
    };

    let id = state.jobs.create(&job).await?;

    Ok(Json(CreateJobResponse {
        id,
        message: "Job added successfully".to_string(),
    }))
}

/// GET /jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Result<Json<Vec<JobRow>>, AppError> {
    Ok(Json(state.jobs.list_all().await?))
}

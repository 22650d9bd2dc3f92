//! Axum route handlers for job matching and recommendations.

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::Serialize;
use tracing::info;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::matching::criteria::MatchCriteria;
use crate::matching::profile::{Profile, ProfileInput};
use crate::matching::ranker::rank;
use crate::matching::scoring::Recommendation;
use crate::matching::MatchError;
use crate::models::job::JobRow;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
}

/// POST /jobs/match, POST /auth/match
///
/// Hard filter: jobs sharing at least one skill, within the candidate's
/// experience, in the same location.
pub async fn handle_match(
    State(state): State<AppState>,
    payload: Result<Json<ProfileInput>, JsonRejection>,
) -> Result<Json<Vec<JobRow>>, AppError> {
    let profile = parse_profile(payload)?;
    let jobs = state
        .jobs
        .find_matching(&MatchCriteria::from(&profile))
        .await?;
    Ok(Json(jobs))
}

/// POST /jobs/recommend
///
/// Scores every job against the submitted profile and returns the best `top_n`.
pub async fn handle_recommend(
    State(state): State<AppState>,
    payload: Result<Json<ProfileInput>, JsonRejection>,
) -> Result<Json<RecommendResponse>, AppError> {
    let profile = parse_profile(payload)?;
    recommend(&state, &profile).await
}

/// GET /jobs/recommend/me
///
/// Same as `handle_recommend`, using the caller's stored profile.
pub async fn handle_recommend_me(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<RecommendResponse>, AppError> {
    let user = state
        .users
        .find_by_id(auth.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    let profile = Profile::from_user(&user)?;
    recommend(&state, &profile).await
}

/// Body errors and field errors both surface as `InvalidProfile`.
fn parse_profile(payload: Result<Json<ProfileInput>, JsonRejection>) -> Result<Profile, MatchError> {
    let Json(input) = payload?;
    Profile::try_from(input)
}

async fn recommend(state: &AppState, profile: &Profile) -> Result<Json<RecommendResponse>, AppError> {
    let jobs = state.jobs.list_all().await?;
    let recommendations = rank(
        state.scorer.as_ref(),
        profile,
        &jobs,
        state.config.recommend_top_n,
    )?;

    info!(
        "Recommended {} of {} jobs (top score {:?})",
        recommendations.len(),
        jobs.len(),
        recommendations.first().map(|r| r.match_score)
    );

    Ok(Json(RecommendResponse { recommendations }))
}

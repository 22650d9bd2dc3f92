//! Axum route handlers for the plain user directory.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::user::{NewUser, UserSummary};
use crate::state::AppState;
use crate::validation::{check_skills, is_plausible_email, non_negative, require_field};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<i32>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub id: i64,
}

/// POST /users
///
/// Creates a user with a complete matching profile and no password.
pub async fn handle_create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<CreateUserResponse>, AppError> {
    let Json(request) = payload?;
    let name = require_field(request.name, "name")?;
    let email = require_field(request.email, "email")?;
    if !is_plausible_email(&email) {
        return Err(AppError::Validation("Valid email is required".to_string()));
    }
    let skills = check_skills(require_field(request.skills, "skills")?)?;
    let experience = request
        .experience
        .ok_or_else(|| AppError::Validation("experience is required".to_string()))?;
    let experience = non_negative(experience, "experience")?;
    let location = require_field(request.location, "location")?;

    let id = state
        .users
        .create(&NewUser {
            name,
            email,
            password_hash: None,
            skills: Some(skills),
            experience: Some(experience),
            location: Some(location),
        })
        .await?;

    Ok(Json(CreateUserResponse { id }))
}

/// GET /users
pub async fn handle_list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserSummary>>, AppError> {
    Ok(Json(state.users.list_all().await?))
}

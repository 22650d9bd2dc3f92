//! Axum route handlers for the Auth API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::{issue_token, Claims};
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::user::{NewUser, ProfileUpdate};
use crate::state::AppState;
use crate::validation::{
    check_skills, is_plausible_email, non_negative, optional_field, require_field,
};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<i32>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, AppError> {
    let Json(request) = payload?;
    let email = require_field(request.email, "email")?;
    let password = require_field(request.password, "password")?;
    let name = require_field(request.name, "name")?;

    if !is_plausible_email(&email) {
        return Err(AppError::Validation("A valid email is required".to_string()));
    }

    let id = state
        .users
        .create(&NewUser {
            name,
            email,
            password_hash: Some(hash_blocking(password).await?),
            ..NewUser::default()
        })
        .await?;

    info!("Registered user {id}");
    Ok(Json(RegisterResponse {
        id,
        message: "User registered successfully".to_string(),
    }))
}

/// bcrypt is CPU-bound; keep it off the async workers.
async fn hash_blocking(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::Internal(e.into()))?
}

/// POST /auth/login
///
/// Unknown email, password-less account and wrong password all yield the same 401.
pub async fn handle_login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Json(request) = payload?;
    let email = require_field(request.email, "email")?;
    let password = require_field(request.password, "password")?;

    let user = state
        .users
        .find_by_email(&email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let Some(stored) = user.password_hash.clone() else {
        return Err(AppError::Unauthorized);
    };
    let valid = tokio::task::spawn_blocking(move || verify_password(&password, &stored))
        .await
        .map_err(|e| AppError::Internal(e.into()))?;
    if !valid {
        return Err(AppError::Unauthorized);
    }

    let claims = Claims {
        sub: user.id,
        email: user.email,
        exp: (Utc::now() + Duration::seconds(state.config.token_ttl_secs)).timestamp(),
    };
    let token = issue_token(&claims, &state.config.token_secret)?;

    info!("User {} logged in", claims.sub);
    Ok(Json(LoginResponse { token }))
}

/// GET /auth/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<ProfileResponse>, AppError> {
    let user = state
        .users
        .find_by_id(auth.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(ProfileResponse {
        id: user.id,
        name: user.name,
        email: user.email,
    }))
}

/// PUT /auth/profile
///
/// Partial update; blank strings count as "not provided".
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(request) = payload?;
    let update = ProfileUpdate {
        name: optional_field(request.name),
        skills: optional_field(request.skills).map(check_skills).transpose()?,
        experience: request
            .experience
            .map(|e| non_negative(e, "experience"))
            .transpose()?,
        location: optional_field(request.location),
    };

    if update.is_empty() {
        return Err(AppError::Validation(
            "At least one field must be provided to update".to_string(),
        ));
    }

    if !state.users.update_profile(auth.id, &update).await? {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    info!("Updated profile for user {} ({})", auth.id, auth.email);
    Ok(Json(MessageResponse {
        message: "Profile updated successfully".to_string(),
    }))
}

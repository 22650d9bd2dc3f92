//! Bearer-token guard for protected routes.

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use chrono::Utc;

use crate::auth::token::verify_token;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::state::AppState;

fn extract_bearer(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Validates the bearer token and injects `AuthUser` into request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer(&request).ok_or(AppError::Unauthorized)?;
    let claims = verify_token(token, &state.config.token_secret, Utc::now())?;

    request.extensions_mut().insert(AuthUser {
        id: claims.sub,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

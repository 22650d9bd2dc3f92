pub mod health;


use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::auth::middleware::require_auth;
use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::state::AppState;
use crate::users::handlers as users;

pub fn build_router(state: AppState) -> Router {
    let auth_layer = middleware::from_fn_with_state(state.clone(), require_auth);

    let protected = Router::new()
        .route(
            "/auth/profile",
            get(auth::handle_get_profile).put(auth::handle_update_profile),
        )
        .route("/jobs/match", post(matching::handle_match))
        .route("/jobs/recommend", post(matching::handle_recommend))
        .route("/jobs/recommend/me", get(matching::handle_recommend_me))
        .route_layer(auth_layer.clone());

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Users
        .route(
            "/users",
            get(users::handle_list_users).post(users::handle_create_user),
        )
        // Auth
        .route("/auth/register", post(auth::handle_register))
        .route("/auth/login", post(auth::handle_login))
        .route("/auth/match", post(matching::handle_match))
        // Jobs: listing is public, posting needs a token
        .route(
            "/jobs",
            get(jobs::handle_list_jobs)
                .merge(post(jobs::handle_create_job).route_layer(auth_layer)),
        )
        .merge(protected)
        .with_state(state)
}

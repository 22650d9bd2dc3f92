use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::auth::token::{issue_token, Claims};
use crate::config::Config;
use crate::matching::scoring::WeightedJobScorer;
use crate::models::job::JobRow;
use crate::state::AppState;
use crate::test_utils::{InMemoryJobRepository, InMemoryUserRepository};

pub const TEST_SECRET: &str = "test-token-secret";

pub fn test_job(id: i64, skills: &str, experience: i32, location: &str) -> JobRow {
    JobRow {
        id,
        title: format!("Job {id}"),
        company: "Acme".to_string(),
        required_skills: skills.to_string(),
        experience_required: experience,
        location: location.to_string(),
        created_at: Utc::now(),
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        token_secret: TEST_SECRET.to_string(),
        token_ttl_secs: 3600,
        recommend_top_n: 5,
        port: 0,
        rust_log: "debug".to_string(),
    }
}

pub fn test_state(jobs: InMemoryJobRepository, users: InMemoryUserRepository) -> AppState {
    AppState {
        jobs: Arc::new(jobs),
        users: Arc::new(users),
        scorer: Arc::new(WeightedJobScorer::default()),
        config: test_config(),
    }
}

/// A valid bearer token for `user_id`, signed with `TEST_SECRET`.
pub fn test_token(user_id: i64) -> String {
    let claims = Claims {
        sub: user_id,
        email: format!("user{user_id}@example.com"),
        exp: (Utc::now() + Duration::hours(1)).timestamp(),
    };
    issue_token(&claims, TEST_SECRET).unwrap()
}

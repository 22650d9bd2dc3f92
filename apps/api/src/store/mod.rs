//! Storage ports. Handlers depend only on these traits; `postgres` is the
//! production adapter.

pub mod postgres;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::matching::criteria::MatchCriteria;
use crate::models::job::{JobRow, NewJob};
use crate::models::user::{NewUser, ProfileUpdate, UserRow, UserSummary};

pub use postgres::PgStore;

#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Inserts a job and returns its id.
    async fn create(&self, job: &NewJob) -> Result<i64, AppError>;

    /// All jobs, ordered by id.
    async fn list_all(&self) -> Result<Vec<JobRow>, AppError>;

    /// Jobs passing `criteria`, ordered by id.
    async fn find_matching(&self, criteria: &MatchCriteria) -> Result<Vec<JobRow>, AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a user and returns its id. A taken email is `AppError::Conflict`.
    async fn create(&self, user: &NewUser) -> Result<i64, AppError>;

    async fn list_all(&self) -> Result<Vec<UserSummary>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<UserRow>, AppError>;

    /// Email lookup is case-insensitive.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRow>, AppError>;

    /// Applies the non-empty fields of `update`. Returns false if no such user exists.
    async fn update_profile(&self, id: i64, update: &ProfileUpdate) -> Result<bool, AppError>;
}

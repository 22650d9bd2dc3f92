use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;
use crate::matching::criteria::MatchCriteria;
use crate::models::job::{JobRow, NewJob};
use crate::models::user::{NewUser, ProfileUpdate, UserRow, UserSummary};
use crate::store::{JobRepository, UserRepository};

const UNIQUE_VIOLATION: &str = "23505";

/// Postgres-backed implementation of both repositories over one pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Opens a connection pool against `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self> {
        info!("Connecting to PostgreSQL...");

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        info!("PostgreSQL connection pool established");
        Ok(Self { pool })
    }
}

#[async_trait]
impl JobRepository for PgStore {
    async fn create(&self, job: &NewJob) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO jobs (title, company, required_skills, experience_required, location)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&job.title)
        .bind(&job.company)
        .bind(&job.required_skills)
        .bind(job.experience_required)
        .bind(&job.location)
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted job {id} ({} at {})", job.title, job.company);
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<JobRow>, AppError> {
        Ok(
            sqlx::query_as::<_, JobRow>("SELECT * FROM jobs ORDER BY id")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn find_matching(&self, criteria: &MatchCriteria) -> Result<Vec<JobRow>, AppError> {
        Ok(sqlx::query_as::<_, JobRow>(
            r#"
            SELECT * FROM jobs
            WHERE LOWER(required_skills) LIKE ANY($1)
              AND experience_required <= $2
              AND LOWER(location) = $3
            ORDER BY id
            "#,
        )
        .bind(criteria.like_patterns())
        .bind(i64::from(criteria.experience))
        .bind(&criteria.location)
        .fetch_all(&self.pool)
        .await?)
    }
}

#[async_trait]
impl UserRepository for PgStore {
    async fn create(&self, user: &NewUser) -> Result<i64, AppError> {
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (name, email, password_hash, skills, experience, location)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.skills)
        .bind(user.experience)
        .bind(&user.location)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(id) => {
                info!("Inserted user {id}");
                Ok(id)
            }
            Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some(UNIQUE_VIOLATION) => Err(
                AppError::Conflict(format!("Email {} is already registered", user.email)),
            ),
            Err(e) => Err(e.into()),
        }
    }

    async fn list_all(&self) -> Result<Vec<UserSummary>, AppError> {
        Ok(sqlx::query_as::<_, UserSummary>(
            "SELECT id, name, email, skills, experience, location, created_at FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UserRow>, AppError> {
        Ok(
            sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRow>, AppError> {
        Ok(
            sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn update_profile(&self, id: i64, update: &ProfileUpdate) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                name = COALESCE($1, name),
                skills = COALESCE($2, skills),
                experience = COALESCE($3, experience),
                location = COALESCE($4, location)
            WHERE id = $5
            "#,
        )
        .bind(&update.name)
        .bind(&update.skills)
        .bind(update.experience)
        .bind(&update.location)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

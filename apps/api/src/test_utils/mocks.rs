use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use crate::errors::AppError;
use crate::matching::criteria::MatchCriteria;
use crate::models::job::{JobRow, NewJob};
use crate::models::user::{NewUser, ProfileUpdate, UserRow, UserSummary};
use crate::store::{JobRepository, UserRepository};

// ============================================================================
// In-Memory Job Repository
// ============================================================================

#[derive(Default, Clone)]
pub struct InMemoryJobRepository {
    jobs: Arc<RwLock<Vec<JobRow>>>,
}

impl InMemoryJobRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a job for testing
    pub fn with_job(self, job: JobRow) -> Self {
        self.jobs.write().unwrap().push(job);
        self
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn create(&self, job: &NewJob) -> Result<i64, AppError> {
        let mut jobs = self.jobs.write().unwrap();
        let id = jobs.iter().map(|j| j.id).max().unwrap_or(0) + 1;
        jobs.push(JobRow {
            id,
            title: job.title.clone(),
            company: job.company.clone(),
            required_skills: job.required_skills.clone(),
            experience_required: job.experience_required,
            location: job.location.clone(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<JobRow>, AppError> {
        let mut jobs = self.jobs.read().unwrap().clone();
        jobs.sort_by_key(|j| j.id);
        Ok(jobs)
    }

    async fn find_matching(&self, criteria: &MatchCriteria) -> Result<Vec<JobRow>, AppError> {
        let mut jobs = self.list_all().await?;
        jobs.retain(|j| criteria.accepts(j));
        Ok(jobs)
    }
}

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<UserRow>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: UserRow) -> Self {
        self.users.write().unwrap().push(user);
        self
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> Result<i64, AppError> {
        let mut users = self.users.write().unwrap();
        if users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(AppError::Conflict(format!(
                "Email {} is already registered",
                user.email
            )));
        }
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        users.push(UserRow {
            id,
            name: user.name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            skills: user.skills.clone(),
            experience: user.experience,
            location: user.location.clone(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<UserSummary>, AppError> {
        Ok(self
            .users
            .read()
            .unwrap()
            .iter()
            .cloned()
            .map(UserSummary::from)
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UserRow>, AppError> {
        Ok(self.users.read().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRow>, AppError> {
        Ok(self
            .users
            .read()
            .unwrap()
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn update_profile(&self, id: i64, update: &ProfileUpdate) -> Result<bool, AppError> {
        let mut users = self.users.write().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(false);
        };
        if let Some(name) = &update.name {
            user.name = name.clone();
        }
        if let Some(skills) = &update.skills {
            user.skills = Some(skills.clone());
        }
        if let Some(experience) = update.experience {
            user.experience = Some(experience);
        }
        if let Some(location) = &update.location {
            user.location = Some(location.clone());
        }
        Ok(true)
    }
}

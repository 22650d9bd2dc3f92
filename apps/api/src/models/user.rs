use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row. Never serialized to clients directly; see `UserSummary`.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<i32>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Public projection of a user, without credentials.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub skills: Option<String>,
    pub experience: Option<i32>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for UserSummary {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            skills: row.skills,
            experience: row.experience,
            location: row.location,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<i32>,
    pub location: Option<String>,
}

/// Partial profile update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<i32>,
    pub location: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.skills.is_none()
            && self.experience.is_none()
            && self.location.is_none()
    }
}

//! Candidate profile: the scoring input, built from request bodies or stored users.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::matching::skills::skill_set;
use crate::matching::MatchError;
use crate::models::user::UserRow;

/// Raw `{ skills, experience, location }` body accepted by the match and
/// recommend endpoints. Experience is untyped here; `Profile::try_from`
/// rejects bad values as `InvalidProfile`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileInput {
    pub skills: Option<String>,
    pub experience: Option<Value>,
    pub location: Option<String>,
}

/// Validated candidate profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    /// Normalized, de-duplicated skill tokens in the order supplied.
    pub skills: Vec<String>,
    pub experience: u32,
    pub location: String,
}

impl Profile {
    pub fn new(skills: &str, experience: u32, location: &str) -> Result<Self, MatchError> {
        let skills = skill_set(skills);
        if skills.is_empty() {
            return Err(MatchError::InvalidProfile(
                "skills must list at least one skill".to_string(),
            ));
        }
        // Kept as supplied: location matching does not normalize whitespace.
        if location.trim().is_empty() {
            return Err(MatchError::InvalidProfile(
                "location is required".to_string(),
            ));
        }
        Ok(Self {
            skills,
            experience,
            location: location.to_string(),
        })
    }

    /// Builds the profile stored on a user record.
    pub fn from_user(user: &UserRow) -> Result<Self, MatchError> {
        let skills = user.skills.as_deref().ok_or_else(|| {
            MatchError::InvalidProfile("user profile has no skills".to_string())
        })?;
        let experience = user.experience.ok_or_else(|| {
            MatchError::InvalidProfile("user profile has no experience".to_string())
        })?;
        let experience = u32::try_from(experience).map_err(|_| {
            MatchError::InvalidProfile("experience must be a non-negative integer".to_string())
        })?;
        let location = user.location.as_deref().ok_or_else(|| {
            MatchError::InvalidProfile("user profile has no location".to_string())
        })?;
        Self::new(skills, experience, location)
    }
}

impl TryFrom<ProfileInput> for Profile {
    type Error = MatchError;

    fn try_from(input: ProfileInput) -> Result<Self, Self::Error> {
        let skills = input
            .skills
            .ok_or_else(|| MatchError::InvalidProfile("skills is required".to_string()))?;
        let experience = match input.experience {
            None | Some(Value::Null) => {
                return Err(MatchError::InvalidProfile(
                    "experience is required".to_string(),
                ))
            }
            Some(value) => parse_experience(&value)?,
        };
        let location = input
            .location
            .ok_or_else(|| MatchError::InvalidProfile("location is required".to_string()))?;
        Self::new(&skills, experience, &location)
    }
}

/// Accepts a JSON integer (or integral float) or a string holding one.
fn parse_experience(value: &Value) -> Result<u32, MatchError> {
    let parsed = match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .or_else(|| {
                n.as_f64()
                    .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u32::MAX as f64)
                    .map(|f| f as u32)
            }),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        MatchError::InvalidProfile(format!(
            "experience must be a non-negative integer, got {value}"
        ))
    })
}

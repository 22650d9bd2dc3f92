//! Request field checks shared by the handlers.

use crate::errors::AppError;
use crate::matching::skills::skill_set;

/// Returns the trimmed value, or a validation error naming `field` when it is
/// missing or blank.
pub fn require_field(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{field} is required"))),
    }
}

/// Trimmed value, with blank strings treated as absent.
pub fn optional_field(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Minimal shape check: one `@` with something on both sides and a dot in the domain.
pub fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Rejects skill lists with no usable token, such as `" , "`.
pub fn check_skills(skills: String) -> Result<String, AppError> {
    if skill_set(&skills).is_empty() {
        return Err(AppError::Validation(
            "skills must list at least one skill".to_string(),
        ));
    }
    Ok(skills)
}

pub fn non_negative(value: i32, field: &str) -> Result<i32, AppError> {
    if value < 0 {
        return Err(AppError::Validation(format!(
            "{field} must be a non-negative integer"
        )));
    }
    Ok(value)
}

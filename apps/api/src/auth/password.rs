//! bcrypt password hashes.

use anyhow::Context;

use crate::errors::AppError;

/// Work factor for new hashes. Existing hashes carry their own cost.
pub const BCRYPT_COST: u32 = 10;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    Ok(bcrypt::hash(password, BCRYPT_COST).context("Failed to hash password")?)
}

/// Returns false for malformed stored hashes instead of erroring.
pub fn verify_password(password: &str, stored: &str) -> bool {
    bcrypt::verify(password, stored).unwrap_or(false)
}

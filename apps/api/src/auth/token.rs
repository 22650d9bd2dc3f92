//! Bearer tokens: `base64url(claims JSON).hex(HMAC-SHA256 over the first part)`.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::errors::AppError;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: i64,
    pub email: String,
    /// Expiry, unix seconds.
    pub exp: i64,
}

pub fn issue_token(claims: &Claims, secret: &str) -> Result<String, AppError> {
    let payload = serde_json::to_vec(claims)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode token claims: {e}")))?;
    let encoded = URL_SAFE_NO_PAD.encode(payload);
    let signature = hex::encode(mac(secret, encoded.as_bytes())?.finalize().into_bytes());
    Ok(format!("{encoded}.{signature}"))
}

/// Checks signature and expiry. Any failure is `Unauthorized`.
pub fn verify_token(token: &str, secret: &str, now: DateTime<Utc>) -> Result<Claims, AppError> {
    let (encoded, signature) = token.split_once('.').ok_or(AppError::Unauthorized)?;
    let signature = hex::decode(signature).map_err(|_| AppError::Unauthorized)?;

    mac(secret, encoded.as_bytes())?
        .verify_slice(&signature)
        .map_err(|_| AppError::Unauthorized)?;

    let payload = URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|_| AppError::Unauthorized)?;
    let claims: Claims = serde_json::from_slice(&payload).map_err(|_| AppError::Unauthorized)?;

    if claims.exp <= now.timestamp() {
        tracing::debug!("Rejected expired token for user {}", claims.sub);
        return Err(AppError::Unauthorized);
    }
    Ok(claims)
}

fn mac(secret: &str, data: &[u8]) -> Result<HmacSha256, AppError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid token secret: {e}")))?;
    mac.update(data);
    Ok(mac)
}

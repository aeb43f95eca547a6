//! Bearer-token issuance and verification
//!
//! Tokens are opaque UUIDs stored server-side with an expiry, issued at
//! login and checked on every protected request. This is a demo-grade
//! scheme: there is no refresh flow and no revocation endpoint.

use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::db::TokenRecord;
use crate::{Error, Result};

/// Token lifetime
pub const TOKEN_TTL_DAYS: i64 = 7;

/// Issue a new bearer token for a user and persist it
pub async fn create_token(db: &SqlitePool, user_id: &str) -> Result<String> {
    let token = Uuid::new_v4().to_string();
    let now = Utc::now();
    let expires_at = now + Duration::days(TOKEN_TTL_DAYS);

    sqlx::query("INSERT INTO tokens (token, user_id, created_at, expires_at) VALUES (?, ?, ?, ?)")
        .bind(&token)
        .bind(user_id)
        .bind(now)
        .bind(expires_at)
        .execute(db)
        .await?;

    Ok(token)
}

/// Verify a bearer token and return the owning user id
///
/// Fails with `Unauthorized` when the token is unknown or expired.
pub async fn verify_token(db: &SqlitePool, token: &str) -> Result<String> {
    let record: Option<TokenRecord> = sqlx::query_as("SELECT * FROM tokens WHERE token = ?")
        .bind(token)
        .fetch_optional(db)
        .await?;

    let record = record.ok_or_else(|| Error::Unauthorized("Invalid token".to_string()))?;

    if token_expired(record.expires_at, Utc::now()) {
        return Err(Error::Unauthorized("Token expired".to_string()));
    }

    Ok(record.user_id)
}

/// Expiry check, separated out for direct testing
pub fn token_expired(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    expires_at < now
}

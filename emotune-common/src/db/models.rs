//! Row models for the EmoTune schema

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Registered user
///
/// The password column holds the raw credential, matching the demo
/// deployment model. Never serialize this struct directly to clients; use
/// the profile response type instead.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Issued bearer token
#[derive(Debug, Clone, FromRow)]
pub struct TokenRecord {
    pub token: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// One detection call in a user's session history
///
/// `distribution` is the serialized five-category score map exactly as
/// returned to the client at detection time.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmotionEvent {
    pub id: String,
    pub user_id: String,
    pub input_type: String,
    pub emotion: String,
    pub confidence: f64,
    pub distribution: String,
    pub created_at: DateTime<Utc>,
}

/// Listener feedback on a recommended song
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeedbackEntry {
    pub id: String,
    pub user_id: String,
    pub song_id: String,
    pub session_id: String,
    /// -1 dislike, 0 neutral, 1 like
    pub rating: i64,
    /// Whether the playlist matched the detected emotion, if reported
    pub emotion_match: Option<bool>,
    pub created_at: DateTime<Utc>,
}

//! Shared API request/response types
//!
//! Wire types for the EmoTune HTTP surface. Kept in the common crate so
//! clients and the service agree on one definition.

use chrono::{DateTime, Utc};
use emotune_engine::Emotion;
use serde::{Deserialize, Serialize};

use crate::db::{EmotionEvent, FeedbackEntry};

// ========================================
// Authentication
// ========================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: String,
    pub username: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: String,
    pub username: String,
}

// ========================================
// Emotion detection
// ========================================

/// Detection request
///
/// `input_type` is one of `text`, `image`, `audio`; `data` carries raw
/// text, a base64 image (optionally a data URL), or an audio resource
/// reference accordingly.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DetectRequest {
    pub user_id: String,
    pub input_type: String,
    pub data: String,
}

// ========================================
// Music recommendation
// ========================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecommendRequest {
    pub user_id: String,
    /// Emotion label; external vocabularies are accepted and normalized
    pub emotion: String,
    pub session_id: Option<String>,
}

/// One song in a recommended playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub file_path: String,
    /// Duration in seconds
    pub duration: u32,
    pub emotion_tags: Vec<String>,
    pub therapeutic_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub emotion: Emotion,
    pub songs: Vec<Song>,
    /// Therapeutic rationale for this playlist
    pub reasoning: String,
    pub session_id: String,
}

// ========================================
// Feedback
// ========================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedbackRequest {
    pub user_id: String,
    pub song_id: String,
    pub session_id: String,
    /// -1 dislike, 0 neutral, 1 like
    pub rating: i64,
    pub emotion_match: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub message: String,
    pub feedback_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackListResponse {
    pub user_id: String,
    pub total_feedback: usize,
    pub feedbacks: Vec<FeedbackEntry>,
}

// ========================================
// Session history and profile
// ========================================

#[derive(Debug, Clone, Serialize)]
pub struct SessionHistoryResponse {
    pub user_id: String,
    pub total_detections: usize,
    pub history: Vec<EmotionEvent>,
}

/// User profile without credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

// ========================================
// Service info and errors
// ========================================

#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub docs: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

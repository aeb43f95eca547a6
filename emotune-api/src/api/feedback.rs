//! Listener feedback endpoints

use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::Utc;
use uuid::Uuid;

use emotune_common::api::{FeedbackListResponse, FeedbackRequest, FeedbackResponse};
use emotune_common::db::FeedbackEntry;
use emotune_common::Error;

use crate::api::AuthUser;
use crate::db;
use crate::error::ApiResult;
use crate::AppState;

/// POST /api/feedback/submit
pub async fn submit_feedback(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(request): Json<FeedbackRequest>,
) -> ApiResult<Json<FeedbackResponse>> {
    if request.user_id != user_id {
        return Err(Error::Forbidden("User ID mismatch".to_string()).into());
    }
    if !(-1..=1).contains(&request.rating) {
        return Err(Error::InvalidInput(
            "Rating must be -1 (dislike), 0 (neutral), or 1 (like)".to_string(),
        )
        .into());
    }

    let entry = FeedbackEntry {
        id: Uuid::new_v4().to_string(),
        user_id,
        song_id: request.song_id,
        session_id: request.session_id,
        rating: request.rating,
        emotion_match: request.emotion_match,
        created_at: Utc::now(),
    };
    db::insert_feedback(&state.db, &entry).await?;

    Ok(Json(FeedbackResponse {
        message: "Feedback recorded successfully".to_string(),
        feedback_id: entry.id,
    }))
}

/// GET /api/feedback/user/:user_id
///
/// Users can only read their own feedback.
pub async fn get_user_feedback(
    State(state): State<AppState>,
    Extension(AuthUser(authenticated_user)): Extension<AuthUser>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<FeedbackListResponse>> {
    if user_id != authenticated_user {
        return Err(Error::Forbidden("Cannot access other users' feedback".to_string()).into());
    }

    let feedbacks = db::list_feedback(&state.db, &user_id).await?;

    Ok(Json(FeedbackListResponse {
        user_id,
        total_feedback: feedbacks.len(),
        feedbacks,
    }))
}

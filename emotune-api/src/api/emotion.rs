//! Emotion detection endpoint

use axum::extract::State;
use axum::{Extension, Json};
use uuid::Uuid;

use emotune_common::api::DetectRequest;
use emotune_common::db::EmotionEvent;
use emotune_common::Error;
use emotune_engine::{detect, EmotionResult, Modality};

use crate::api::AuthUser;
use crate::db;
use crate::error::ApiResult;
use crate::AppState;

/// POST /api/emotion/detect
///
/// Runs the scorer for the requested modality and appends the outcome to
/// the caller's session history. Detection itself never fails; malformed
/// payloads come back as the zero-confidence neutral result. Only an
/// unknown `input_type` or a user id mismatch is rejected.
pub async fn detect_emotion(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(request): Json<DetectRequest>,
) -> ApiResult<Json<EmotionResult>> {
    if request.user_id != user_id {
        return Err(Error::Forbidden("User ID mismatch".to_string()).into());
    }

    let modality = Modality::from_name(&request.input_type).ok_or_else(|| {
        Error::InvalidInput(format!("Invalid input_type: {}", request.input_type))
    })?;

    let result = match (modality, &state.vision) {
        // Remote inference when configured; on failure the client itself
        // degrades to the neutral distribution
        (Modality::Image, Some(vision)) => {
            EmotionResult::from_distribution(vision.classify(&request.data).await)
        }
        _ => detect(modality, &request.data),
    };

    let event = EmotionEvent {
        id: Uuid::new_v4().to_string(),
        user_id,
        input_type: modality.as_str().to_string(),
        emotion: result.emotion.as_str().to_string(),
        confidence: result.confidence,
        distribution: serde_json::to_string(&result.distribution)
            .map_err(|e| Error::Internal(format!("Failed to serialize distribution: {}", e)))?,
        created_at: result.timestamp,
    };
    db::insert_emotion_event(&state.db, &event).await?;

    Ok(Json(result))
}

//! Music recommendation endpoint

use axum::extract::State;
use axum::{Extension, Json};
use uuid::Uuid;

use emotune_common::api::{RecommendRequest, RecommendResponse};
use emotune_common::Error;
use emotune_engine::{metadata, normalize};

use crate::api::AuthUser;
use crate::catalog;
use crate::error::ApiResult;
use crate::AppState;

/// POST /api/music/recommend
///
/// Returns the fixed playlist for the requested emotion. The label is
/// normalized first, so external vocabularies ("JOY", "rage") and unknown
/// labels resolve to a playlist rather than an error.
pub async fn recommend_music(
    State(_state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(request): Json<RecommendRequest>,
) -> ApiResult<Json<RecommendResponse>> {
    if request.user_id != user_id {
        return Err(Error::Forbidden("User ID mismatch".to_string()).into());
    }

    let emotion = normalize(&request.emotion);
    let songs = catalog::playlist_for(emotion);
    let reasoning = metadata(emotion).recommendation.to_string();

    let session_id = request
        .session_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    Ok(Json(RecommendResponse {
        emotion,
        songs,
        reasoning,
        session_id,
    }))
}

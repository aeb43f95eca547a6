//! Session history endpoint

use axum::extract::{Path, State};
use axum::{Extension, Json};

use emotune_common::api::SessionHistoryResponse;
use emotune_common::Error;

use crate::api::AuthUser;
use crate::db;
use crate::error::ApiResult;
use crate::AppState;

/// GET /api/session/history/:user_id
///
/// Full detection history for the authenticated user, oldest first.
pub async fn get_session_history(
    State(state): State<AppState>,
    Extension(AuthUser(authenticated_user)): Extension<AuthUser>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<SessionHistoryResponse>> {
    if user_id != authenticated_user {
        return Err(Error::Forbidden("Cannot access other users' history".to_string()).into());
    }

    let history = db::list_emotion_events(&state.db, &user_id).await?;

    Ok(Json(SessionHistoryResponse {
        user_id,
        total_detections: history.len(),
        history,
    }))
}

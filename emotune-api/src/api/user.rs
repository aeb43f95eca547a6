//! User profile endpoint

use axum::extract::{Path, State};
use axum::{Extension, Json};

use emotune_common::api::ProfileResponse;
use emotune_common::Error;

use crate::api::AuthUser;
use crate::db;
use crate::error::ApiResult;
use crate::AppState;

/// GET /api/user/profile/:user_id
///
/// Profile of the authenticated user, without the stored credential.
pub async fn get_user_profile(
    State(state): State<AppState>,
    Extension(AuthUser(authenticated_user)): Extension<AuthUser>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    if user_id != authenticated_user {
        return Err(Error::Forbidden("Cannot access other users' profile".to_string()).into());
    }

    let user = db::find_user_by_id(&state.db, &user_id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    Ok(Json(ProfileResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        created_at: user.created_at,
    }))
}

//! Authentication middleware for emotune-api
//!
//! Validates the `Authorization: Bearer <token>` header on protected
//! routes and injects the authenticated user id into request extensions.
//! Health and account endpoints do not use this middleware.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use emotune_common::auth::verify_token;
use emotune_common::Error;

use crate::error::ApiError;
use crate::AppState;

/// Authenticated user id, available to handlers via `Extension`
#[derive(Debug, Clone)]
pub struct AuthUser(pub String);

/// Bearer-token authentication middleware
///
/// Returns 401 when the header is missing or malformed, or when the token
/// is unknown or expired.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| Error::Unauthorized("Missing bearer token".to_string()))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| Error::Unauthorized("Malformed authorization header".to_string()))?;

    let user_id = verify_token(&state.db, token).await?;

    request.extensions_mut().insert(AuthUser(user_id));
    Ok(next.run(request).await)
}

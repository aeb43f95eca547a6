//! User registration and login endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use uuid::Uuid;

use emotune_common::api::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use emotune_common::auth::create_token;
use emotune_common::db::User;
use emotune_common::Error;

use crate::db;
use crate::error::ApiResult;
use crate::AppState;

/// POST /api/auth/register
pub async fn register_user(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    validate_registration(&request)?;

    let user = User {
        id: Uuid::new_v4().to_string(),
        username: request.username,
        email: request.email,
        // Stored as-is; this is a demo deployment without credential hardening
        password: request.password,
        created_at: Utc::now(),
    };
    db::insert_user(&state.db, &user).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user_id: user.id,
            username: user.username,
        }),
    ))
}

/// POST /api/auth/login
///
/// Issues a fresh bearer token on every successful login. The same
/// "Invalid credentials" answer covers unknown users and wrong passwords.
pub async fn login_user(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let user = db::find_user_by_username(&state.db, &request.username)
        .await?
        .ok_or_else(|| Error::Unauthorized("Invalid credentials".to_string()))?;

    if user.password != request.password {
        return Err(Error::Unauthorized("Invalid credentials".to_string()).into());
    }

    let token = create_token(&state.db, &user.id).await?;

    Ok(Json(LoginResponse {
        token,
        user_id: user.id,
        username: user.username,
    }))
}

fn validate_registration(request: &RegisterRequest) -> Result<(), Error> {
    let username_len = request.username.chars().count();
    if !(3..=50).contains(&username_len) {
        return Err(Error::InvalidInput(
            "Username must be between 3 and 50 characters".to_string(),
        ));
    }
    if !request.email.contains('@') {
        return Err(Error::InvalidInput("Invalid email address".to_string()));
    }
    if request.password.chars().count() < 6 {
        return Err(Error::InvalidInput(
            "Password must be at least 6 characters".to_string(),
        ));
    }
    Ok(())
}

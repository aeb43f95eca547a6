//! emotune-api library - EmoTune backend service
//!
//! Emotion-aware music recommendation backend: accepts text/image/audio
//! input, assigns an emotion via the engine crate, stores session history,
//! and returns a fixed playlist for that emotion.

use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::services::VisionClient;

pub mod api;
pub mod catalog;
pub mod db;
pub mod error;
pub mod services;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Remote facial-emotion client; the stub image scorer is used when absent
    pub vision: Option<Arc<VisionClient>>,
}

impl AppState {
    /// Create application state without remote inference
    pub fn new(db: SqlitePool) -> Self {
        Self { db, vision: None }
    }

    /// Create application state with an optional remote inference client
    pub fn with_vision(db: SqlitePool, vision: Option<VisionClient>) -> Self {
        Self {
            db,
            vision: vision.map(Arc::new),
        }
    }
}

/// Build application router
///
/// Protected routes require a bearer token; registration, login, and
/// health stay public. CORS is permissive for frontend development.
pub fn build_router(state: AppState) -> Router {
    use axum::middleware;
    use axum::routing::{get, post};

    // Protected routes (require authentication)
    let protected = Router::new()
        .route("/api/emotion/detect", post(api::detect_emotion))
        .route("/api/music/recommend", post(api::recommend_music))
        .route("/api/feedback/submit", post(api::submit_feedback))
        .route("/api/feedback/user/:user_id", get(api::get_user_feedback))
        .route("/api/session/history/:user_id", get(api::get_session_history))
        .route("/api/user/profile/:user_id", get(api::get_user_profile))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api::auth_middleware,
        ));

    // Public routes (no authentication)
    let public = Router::new()
        .route("/", get(api::service_info))
        .route("/api/auth/register", post(api::register_user))
        .route("/api/auth/login", post(api::login_user))
        .merge(api::health_routes());

    Router::new()
        .merge(protected)
        .merge(public)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

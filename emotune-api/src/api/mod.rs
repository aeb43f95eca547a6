//! HTTP API handlers for emotune-api

pub mod account;
pub mod auth;
pub mod emotion;
pub mod feedback;
pub mod health;
pub mod music;
pub mod session;
pub mod user;

pub use account::{login_user, register_user};
pub use auth::{auth_middleware, AuthUser};
pub use emotion::detect_emotion;
pub use feedback::{get_user_feedback, submit_feedback};
pub use health::{health_routes, service_info};
pub use music::recommend_music;
pub use session::get_session_history;
pub use user::get_user_profile;

//! Database schema and row models

mod init;
mod models;

pub use init::{init_database, init_in_memory};
pub use models::{EmotionEvent, FeedbackEntry, TokenRecord, User};

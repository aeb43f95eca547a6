//! Database access layer for emotune-api

use emotune_common::db::{EmotionEvent, FeedbackEntry, User};
use emotune_common::{Error, Result};
use sqlx::SqlitePool;

/// Insert a new user row
///
/// Fails with `InvalidInput` when the username or email is already taken.
pub async fn insert_user(db: &SqlitePool, user: &User) -> Result<()> {
    let taken: Option<(String,)> =
        sqlx::query_as("SELECT username FROM users WHERE username = ? LIMIT 1")
            .bind(&user.username)
            .fetch_optional(db)
            .await?;
    if taken.is_some() {
        return Err(Error::InvalidInput("Username already exists".to_string()));
    }

    let taken: Option<(String,)> = sqlx::query_as("SELECT email FROM users WHERE email = ? LIMIT 1")
        .bind(&user.email)
        .fetch_optional(db)
        .await?;
    if taken.is_some() {
        return Err(Error::InvalidInput("Email already registered".to_string()));
    }

    sqlx::query(
        "INSERT INTO users (id, username, email, password, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&user.id)
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.password)
    .bind(user.created_at)
    .execute(db)
    .await?;

    Ok(())
}

pub async fn find_user_by_username(db: &SqlitePool, username: &str) -> Result<Option<User>> {
    let user = sqlx::query_as("SELECT * FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(db)
        .await?;
    Ok(user)
}

pub async fn find_user_by_id(db: &SqlitePool, user_id: &str) -> Result<Option<User>> {
    let user = sqlx::query_as("SELECT * FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(db)
        .await?;
    Ok(user)
}

/// Append a detection to the user's session history
pub async fn insert_emotion_event(db: &SqlitePool, event: &EmotionEvent) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO emotion_events (id, user_id, input_type, emotion, confidence, distribution, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&event.id)
    .bind(&event.user_id)
    .bind(&event.input_type)
    .bind(&event.emotion)
    .bind(event.confidence)
    .bind(&event.distribution)
    .bind(event.created_at)
    .execute(db)
    .await?;

    Ok(())
}

/// Detection history for one user, oldest first
pub async fn list_emotion_events(db: &SqlitePool, user_id: &str) -> Result<Vec<EmotionEvent>> {
    let events =
        sqlx::query_as("SELECT * FROM emotion_events WHERE user_id = ? ORDER BY created_at ASC")
            .bind(user_id)
            .fetch_all(db)
            .await?;
    Ok(events)
}

pub async fn insert_feedback(db: &SqlitePool, entry: &FeedbackEntry) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO feedback (id, user_id, song_id, session_id, rating, emotion_match, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&entry.id)
    .bind(&entry.user_id)
    .bind(&entry.song_id)
    .bind(&entry.session_id)
    .bind(entry.rating)
    .bind(entry.emotion_match)
    .bind(entry.created_at)
    .execute(db)
    .await?;

    Ok(())
}

pub async fn list_feedback(db: &SqlitePool, user_id: &str) -> Result<Vec<FeedbackEntry>> {
    let entries =
        sqlx::query_as("SELECT * FROM feedback WHERE user_id = ? ORDER BY created_at ASC")
            .bind(user_id)
            .fetch_all(db)
            .await?;
    Ok(entries)
}

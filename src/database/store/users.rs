use sqlx::PgExecutor;
use uuid::Uuid;

use crate::database::models::User;

pub async fn find_by_email<'e>(
    ex: impl PgExecutor<'e>,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(ex)
        .await
}

pub async fn find_by_id<'e>(
    ex: impl PgExecutor<'e>,
    id: Uuid,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(ex)
        .await
}

pub async fn insert<'e>(
    ex: impl PgExecutor<'e>,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING *",
    )
    .bind(email)
    .bind(password_hash)
    .fetch_one(ex)
    .await
}

/// Fuzzy email search, capped by the caller (config user_search_limit).
pub async fn search_by_email<'e>(
    ex: impl PgExecutor<'e>,
    fragment: &str,
    limit: i64,
) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email ILIKE $1 ORDER BY email LIMIT $2")
        .bind(format!("%{}%", fragment))
        .bind(limit)
        .fetch_all(ex)
        .await
}

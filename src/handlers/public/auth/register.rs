// handlers/public/auth/register.rs - POST /register handler

use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::password::hash_password;
use crate::database::{store, DatabaseManager};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub lastname: Option<String>,
}

/// POST /register - Create a user account and its profile.
///
/// The user row and the profile row are written in a single transaction, so a
/// failure between the two writes can never leave a user without a profile.
/// A duplicate email answers 401 (the API's historical contract, kept for
/// client compatibility even though 409 would be the conventional choice).
pub async fn register(Json(payload): Json<RegisterRequest>) -> Result<Json<Value>, ApiError> {
    let email = require_field(payload.email.as_deref(), "email")?;
    let password = require_field(payload.password.as_deref(), "password")?;
    let name = require_field(payload.name.as_deref(), "name")?;
    let lastname = require_field(payload.lastname.as_deref(), "lastname")?;

    let pool = DatabaseManager::pool().await?;

    if store::users::find_by_email(&pool, email).await?.is_some() {
        return Err(ApiError::unauthorized("User already exists."));
    }

    let password_hash = hash_password(password)?;

    let mut tx = pool.begin().await?;
    let user = match store::users::insert(&mut *tx, email, &password_hash).await {
        Ok(user) => user,
        // A concurrent registration of the same email slips past the
        // pre-check and lands on the UNIQUE constraint instead; answer
        // exactly as the pre-check would have.
        Err(e) if is_unique_violation(&e) => {
            return Err(ApiError::unauthorized("User already exists."));
        }
        Err(e) => return Err(e.into()),
    };
    store::profiles::insert(&mut *tx, user.id, name, lastname).await?;
    tx.commit().await?;

    tracing::info!(user_id = %user.id, "registered new user");

    Ok(Json(json!({
        "msg": "User account was successfully created."
    })))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

fn require_field<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::bad_request(format!(
            "Please provide a valid {}.",
            field
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_database_unique_violations_map_to_conflict_path() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolClosed));
    }

    #[test]
    fn require_field_rejects_missing_and_empty() {
        assert!(require_field(None, "email").is_err());
        assert!(require_field(Some(""), "email").is_err());
        assert!(require_field(Some("   "), "email").is_err());
        assert_eq!(require_field(Some("a@b.com"), "email").unwrap(), "a@b.com");
    }
}

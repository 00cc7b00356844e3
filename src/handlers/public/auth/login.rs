// handlers/public/auth/login.rs - POST /login handler

use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::password::verify_password;
use crate::auth::{generate_jwt, Claims};
use crate::database::{store, DatabaseManager};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /login - Authenticate and receive a bearer token.
///
/// An unknown email and a wrong password both answer 404, matching the API's
/// historical contract. The token's subject claim is the user id.
pub async fn login(Json(payload): Json<LoginRequest>) -> Result<Json<Value>, ApiError> {
    let (email, password) = credentials(&payload)?;

    let pool = DatabaseManager::pool().await?;

    let user = store::users::find_by_email(&pool, email)
        .await?
        .ok_or_else(|| ApiError::not_found("not found"))?;

    if !verify_password(password, &user.password_hash)? {
        return Err(ApiError::not_found("not found"));
    }

    let token = generate_jwt(Claims::new(user.id, user.email.clone()))?;

    Ok(Json(json!({
        "token": token,
        "user_id": user.id,
        "email": user.email,
    })))
}

/// Both fields present and non-blank, with the same trim rule as
/// registration, so a whitespace-only value never reaches the lookup.
fn credentials(payload: &LoginRequest) -> Result<(&str, &str), ApiError> {
    match (payload.email.as_deref(), payload.password.as_deref()) {
        (Some(email), Some(password))
            if !email.trim().is_empty() && !password.trim().is_empty() =>
        {
            Ok((email, password))
        }
        _ => Err(ApiError::bad_request("Please provide email and password.")),
    }
}

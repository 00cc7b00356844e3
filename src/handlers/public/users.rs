// handlers/public/users.rs - GET /users/:fragment fuzzy email search

use axum::extract::Path;
use axum::response::Json;
use serde_json::Value;

use crate::config;
use crate::database::{store, DatabaseManager};
use crate::error::ApiError;

/// GET /users/:fragment - Case-insensitive substring search over user emails.
///
/// Used by the invite picker on the frontend. The result set is capped by
/// `api.user_search_limit` (3 by default) no matter how many emails match.
/// No match answers 401, matching the API's historical contract.
pub async fn search(Path(fragment): Path<String>) -> Result<Json<Vec<Value>>, ApiError> {
    let limit = config::config().api.user_search_limit;
    let pool = DatabaseManager::pool().await?;

    let users = store::users::search_by_email(&pool, &fragment, limit).await?;
    if users.is_empty() {
        return Err(ApiError::unauthorized("No matching users."));
    }

    Ok(Json(users.iter().map(|u| u.serialize_public()).collect()))
}

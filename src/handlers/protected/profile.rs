// handlers/protected/profile.rs - caller profile and teammate listing

use axum::response::Json;
use axum::Extension;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::Profile;
use crate::database::{store, DatabaseManager};
use crate::error::ApiError;
use crate::middleware::AuthUser;

/// GET /profile - The caller's own profile.
pub async fn get(Extension(caller): Extension<AuthUser>) -> Result<Json<Profile>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let profile = store::profiles::find_by_user(&pool, caller.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Profile not found"))?;
    Ok(Json(profile))
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub lastname: Option<String>,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub gender: Option<String>,
}

/// PUT /profile - Partial profile update.
///
/// The two branches are mutually exclusive, as the API has always behaved:
/// when both name and lastname are supplied only those two fields are
/// written; otherwise description/photo/gender are written. Clients that
/// want both halves updated send two requests.
pub async fn update(
    Extension(caller): Extension<AuthUser>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<Profile>, ApiError> {
    let pool = DatabaseManager::pool().await?;

    let updated = match (payload.name.as_deref(), payload.lastname.as_deref()) {
        (Some(name), Some(lastname)) => {
            store::profiles::update_names(&pool, caller.user_id, name, lastname).await?
        }
        _ => {
            store::profiles::update_details(
                &pool,
                caller.user_id,
                payload.description.as_deref(),
                payload.photo.as_deref(),
                payload.gender.as_deref(),
            )
            .await?
        }
    };

    let profile = updated.ok_or_else(|| ApiError::not_found("Profile not found"))?;
    Ok(Json(profile))
}

/// GET /profiles - Deduplicated teammate profiles.
///
/// Walks the caller's memberships, then every co-member of each of those
/// projects, collecting each teammate's profile once and skipping the
/// caller. Repeated queries rather than a join, which is fine at board
/// scale.
pub async fn teammates(Extension(caller): Extension<AuthUser>) -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;

    let memberships = store::members::list_for_user(&pool, caller.user_id).await?;
    if memberships.is_empty() {
        return Ok(Json(json!({ "msg": "You do not belong to any project." })));
    }

    let mut teammates: Vec<Profile> = Vec::new();
    for membership in &memberships {
        let co_members = store::members::list_for_project(&pool, membership.project_id).await?;
        for member in &co_members {
            if member.user_id == caller.user_id {
                continue;
            }
            if let Some(profile) = store::profiles::find_by_user(&pool, member.user_id).await? {
                if !teammates.contains(&profile) {
                    teammates.push(profile);
                }
            }
        }
    }

    Ok(Json(json!(teammates)))
}

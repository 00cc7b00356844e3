// handlers/protected/projects.rs - project creation, listing, and membership

use axum::extract::Path;
use axum::response::Json;
use axum::Extension;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::models::{MemberRole, Project};
use crate::database::{store, DatabaseManager};
use crate::error::ApiError;
use crate::middleware::AuthUser;

#[derive(Debug, Deserialize)]
pub struct InviteEntry {
    pub email: String,
    /// Role flag as the frontend sends it; "Usuario" grants the user role,
    /// anything else grants admin.
    pub rol: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub members: Vec<InviteEntry>,
}

/// POST /newproject - Create a project owned by the caller.
///
/// The project row, the creator's admin membership, and one membership per
/// invitee are written in a single transaction: an invitee email that does
/// not resolve to a registered user aborts the whole creation with 400
/// instead of leaving a half-built project behind.
pub async fn create(
    Extension(caller): Extension<AuthUser>,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<Json<Value>, ApiError> {
    let name = match payload.name.as_deref() {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(ApiError::bad_request("Please provide a valid name.")),
    };

    let pool = DatabaseManager::pool().await?;
    let mut tx = pool.begin().await?;

    let project = store::projects::insert(
        &mut *tx,
        caller.user_id,
        name,
        payload.description.as_deref(),
        payload.due_date,
    )
    .await?;

    // Creator is always a member with the admin role
    store::members::insert(&mut *tx, caller.user_id, project.id, MemberRole::Admin).await?;

    for invite in &payload.members {
        let user = store::users::find_by_email(&mut *tx, &invite.email)
            .await?
            .ok_or_else(|| {
                ApiError::bad_request(format!("No registered user with email {}", invite.email))
            })?;
        let role = MemberRole::from_invite_flag(invite.rol.as_deref().unwrap_or(""));
        store::members::insert(&mut *tx, user.id, project.id, role).await?;
    }

    tx.commit().await?;

    tracing::info!(project_id = %project.id, invitees = payload.members.len(), "created project");

    let msg = if payload.members.is_empty() {
        "Individual project registered."
    } else {
        "Group project registered."
    };
    Ok(Json(json!({ "msg": msg, "id": project.id })))
}

/// GET /projects - Every project where the caller holds a members row.
///
/// Two-step lookup as the board always did it: member rows by user, then the
/// project behind each row.
pub async fn list(Extension(caller): Extension<AuthUser>) -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;

    let memberships = store::members::list_for_user(&pool, caller.user_id).await?;
    if memberships.is_empty() {
        return Ok(Json(json!({ "msg": "You do not belong to any project." })));
    }

    let mut projects: Vec<Project> = Vec::with_capacity(memberships.len());
    for membership in &memberships {
        if let Some(project) = store::projects::find_by_id(&pool, membership.project_id).await? {
            projects.push(project);
        }
    }

    Ok(Json(json!(projects)))
}

/// GET /projectmember/:project_id - Users behind every members row of a project.
pub async fn members(
    Extension(_caller): Extension<AuthUser>,
    Path(project_id): Path<Uuid>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let pool = DatabaseManager::pool().await?;

    let member_rows = store::members::list_for_project(&pool, project_id).await?;
    let mut users = Vec::with_capacity(member_rows.len());
    for member in &member_rows {
        if let Some(user) = store::users::find_by_id(&pool, member.user_id).await? {
            users.push(user.serialize_public());
        }
    }

    Ok(Json(users))
}

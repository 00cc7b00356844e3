// handlers/public/columns.rs - /column board-bucket CRUD
//
// Column routes take their ids in the JSON body rather than the path,
// matching the wire contract the frontend already speaks.

use axum::extract::Query;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::models::Column;
use crate::database::{store, DatabaseManager};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ColumnListQuery {
    pub project_id: Option<Uuid>,
}

/// GET /column - List columns, optionally scoped to one project.
pub async fn list(Query(query): Query<ColumnListQuery>) -> Result<Json<Vec<Column>>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let columns = match query.project_id {
        Some(project_id) => store::columns::list_for_project(&pool, project_id).await?,
        None => store::columns::list_all(&pool).await?,
    };
    Ok(Json(columns))
}

#[derive(Debug, Deserialize)]
pub struct CreateColumnRequest {
    pub name: Option<String>,
    pub project_id: Option<Uuid>,
}

/// POST /column - Create a column on a project's board.
pub async fn create(Json(payload): Json<CreateColumnRequest>) -> Result<Json<Value>, ApiError> {
    let name = match payload.name.as_deref() {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(ApiError::bad_request("Please provide a valid name.")),
    };
    let project_id = payload
        .project_id
        .ok_or_else(|| ApiError::bad_request("Please provide a valid project_id."))?;

    let pool = DatabaseManager::pool().await?;
    let column = store::columns::insert(&pool, project_id, name).await?;

    Ok(Json(json!({
        "msg": "Column was successfully created.",
        "id": column.id,
    })))
}

#[derive(Debug, Deserialize)]
pub struct RenameColumnRequest {
    pub id: Option<Uuid>,
    pub name: Option<String>,
}

/// PATCH /column - Rename a column.
pub async fn rename(Json(payload): Json<RenameColumnRequest>) -> Result<Json<Value>, ApiError> {
    let name = match payload.name.as_deref() {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(ApiError::bad_request("Please provide a valid name.")),
    };
    let id = payload
        .id
        .ok_or_else(|| ApiError::bad_request("Please provide a valid column id."))?;

    let pool = DatabaseManager::pool().await?;
    let column = store::columns::rename(&pool, id, name)
        .await?
        .ok_or_else(|| ApiError::unauthorized("The column does not exist."))?;

    Ok(Json(json!({
        "msg": "Column was successfully updated.",
        "id": column.id,
    })))
}

#[derive(Debug, Deserialize)]
pub struct DeleteColumnRequest {
    pub id: Option<Uuid>,
}

/// DELETE /column - Remove a column and every task in it.
///
/// The task cascade is explicit: child tasks are deleted first, then the
/// column, all inside one transaction.
pub async fn delete(Json(payload): Json<DeleteColumnRequest>) -> Result<Json<Value>, ApiError> {
    let id = payload
        .id
        .ok_or_else(|| ApiError::bad_request("Please provide a valid column id."))?;

    let pool = DatabaseManager::pool().await?;
    if store::columns::find_by_id(&pool, id).await?.is_none() {
        return Err(ApiError::unauthorized("The column does not exist."));
    }

    let mut tx = pool.begin().await?;
    store::subtasks::delete_for_column(&mut *tx, id).await?;
    let tasks_removed = store::tasks::delete_for_column(&mut *tx, id).await?;
    store::columns::delete(&mut *tx, id).await?;
    tx.commit().await?;

    tracing::info!(column_id = %id, tasks_removed, "deleted column");

    Ok(Json(json!({
        "msg": "Column was successfully deleted.",
    })))
}

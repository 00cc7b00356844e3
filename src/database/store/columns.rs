use sqlx::PgExecutor;
use uuid::Uuid;

use crate::database::models::Column;

pub async fn insert<'e>(
    ex: impl PgExecutor<'e>,
    project_id: Uuid,
    name: &str,
) -> Result<Column, sqlx::Error> {
    sqlx::query_as::<_, Column>(
        "INSERT INTO columns (project_id, name) VALUES ($1, $2) RETURNING *",
    )
    .bind(project_id)
    .bind(name)
    .fetch_one(ex)
    .await
}

pub async fn find_by_id<'e>(
    ex: impl PgExecutor<'e>,
    id: Uuid,
) -> Result<Option<Column>, sqlx::Error> {
    sqlx::query_as::<_, Column>("SELECT * FROM columns WHERE id = $1")
        .bind(id)
        .fetch_optional(ex)
        .await
}

pub async fn list_all<'e>(ex: impl PgExecutor<'e>) -> Result<Vec<Column>, sqlx::Error> {
    sqlx::query_as::<_, Column>("SELECT * FROM columns ORDER BY name")
        .fetch_all(ex)
        .await
}

pub async fn list_for_project<'e>(
    ex: impl PgExecutor<'e>,
    project_id: Uuid,
) -> Result<Vec<Column>, sqlx::Error> {
    sqlx::query_as::<_, Column>("SELECT * FROM columns WHERE project_id = $1 ORDER BY name")
        .bind(project_id)
        .fetch_all(ex)
        .await
}

pub async fn rename<'e>(
    ex: impl PgExecutor<'e>,
    id: Uuid,
    name: &str,
) -> Result<Option<Column>, sqlx::Error> {
    sqlx::query_as::<_, Column>("UPDATE columns SET name = $2 WHERE id = $1 RETURNING *")
        .bind(id)
        .bind(name)
        .fetch_optional(ex)
        .await
}

pub async fn delete<'e>(ex: impl PgExecutor<'e>, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM columns WHERE id = $1")
        .bind(id)
        .execute(ex)
        .await?;
    Ok(result.rows_affected())
}

use chrono::NaiveDate;
use sqlx::PgExecutor;
use uuid::Uuid;

use crate::database::models::Project;

pub async fn insert<'e>(
    ex: impl PgExecutor<'e>,
    owner_id: Uuid,
    name: &str,
    description: Option<&str>,
    due_date: Option<NaiveDate>,
) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "INSERT INTO projects (user_id, name, description, due_date) \
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(owner_id)
    .bind(name)
    .bind(description)
    .bind(due_date)
    .fetch_one(ex)
    .await
}

pub async fn find_by_id<'e>(
    ex: impl PgExecutor<'e>,
    id: Uuid,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
        .bind(id)
        .fetch_optional(ex)
        .await
}

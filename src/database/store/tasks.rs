use chrono::NaiveDate;
use sqlx::PgExecutor;
use uuid::Uuid;

use crate::database::models::{Task, TaskPriority};

pub async fn insert<'e>(
    ex: impl PgExecutor<'e>,
    user_id: Uuid,
    project_id: Uuid,
    column_id: Uuid,
    name: &str,
) -> Result<Task, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "INSERT INTO tasks (user_id, project_id, column_id, name) \
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(user_id)
    .bind(project_id)
    .bind(column_id)
    .bind(name)
    .fetch_one(ex)
    .await
}

/// Full-field update used by PUT /task. All four fields are written.
pub async fn update_fields<'e>(
    ex: impl PgExecutor<'e>,
    id: Uuid,
    name: &str,
    description: &str,
    priority: TaskPriority,
    due_date: NaiveDate,
) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "UPDATE tasks SET name = $2, description = $3, priority = $4, due_date = $5 \
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(name)
    .bind(description)
    .bind(priority)
    .bind(due_date)
    .fetch_optional(ex)
    .await
}

/// Partial update used by PATCH /task: move between columns, flip check_in,
/// or assign a member. Absent fields keep their current value.
pub async fn update_state<'e>(
    ex: impl PgExecutor<'e>,
    id: Uuid,
    column_id: Option<Uuid>,
    check_in: Option<bool>,
    member_id: Option<Uuid>,
) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "UPDATE tasks SET \
           column_id = COALESCE($2, column_id), \
           check_in = COALESCE($3, check_in), \
           member_id = COALESCE($4, member_id) \
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(column_id)
    .bind(check_in)
    .bind(member_id)
    .fetch_optional(ex)
    .await
}

pub async fn delete<'e>(ex: impl PgExecutor<'e>, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
        .bind(id)
        .execute(ex)
        .await?;
    Ok(result.rows_affected())
}

/// Explicit cascade: called inside the column-delete transaction before the
/// column row itself is removed.
pub async fn delete_for_column<'e>(
    ex: impl PgExecutor<'e>,
    column_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tasks WHERE column_id = $1")
        .bind(column_id)
        .execute(ex)
        .await?;
    Ok(result.rows_affected())
}

/// Caller's task list, optionally only pending (check_in = false), capped by
/// the configured page size.
pub async fn list_for_user<'e>(
    ex: impl PgExecutor<'e>,
    user_id: Uuid,
    pending_only: bool,
    limit: i64,
) -> Result<Vec<Task>, sqlx::Error> {
    let sql = if pending_only {
        "SELECT * FROM tasks WHERE user_id = $1 AND check_in = false ORDER BY start_date LIMIT $2"
    } else {
        "SELECT * FROM tasks WHERE user_id = $1 ORDER BY start_date LIMIT $2"
    };
    sqlx::query_as::<_, Task>(sql)
        .bind(user_id)
        .bind(limit)
        .fetch_all(ex)
        .await
}

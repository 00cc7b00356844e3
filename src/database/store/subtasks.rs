use sqlx::PgExecutor;
use uuid::Uuid;

use crate::database::models::Subtask;

/// Explicit cascade: called inside the task-delete transaction before the
/// task row itself is removed. Returns the swept rows so the caller can
/// report how much checklist content went with the task.
pub async fn delete_for_task<'e>(
    ex: impl PgExecutor<'e>,
    task_id: Uuid,
) -> Result<Vec<Subtask>, sqlx::Error> {
    sqlx::query_as::<_, Subtask>("DELETE FROM subtasks WHERE task_id = $1 RETURNING *")
        .bind(task_id)
        .fetch_all(ex)
        .await
}

/// Same cascade one level up, for column deletion: sweep the subtasks of
/// every task in the column before the tasks themselves go.
pub async fn delete_for_column<'e>(
    ex: impl PgExecutor<'e>,
    column_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "DELETE FROM subtasks WHERE task_id IN (SELECT id FROM tasks WHERE column_id = $1)",
    )
    .bind(column_id)
    .execute(ex)
    .await?;
    Ok(result.rows_affected())
}

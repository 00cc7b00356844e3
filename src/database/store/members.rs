use sqlx::PgExecutor;
use uuid::Uuid;

use crate::database::models::{Member, MemberRole};

pub async fn insert<'e>(
    ex: impl PgExecutor<'e>,
    user_id: Uuid,
    project_id: Uuid,
    role: MemberRole,
) -> Result<Member, sqlx::Error> {
    sqlx::query_as::<_, Member>(
        "INSERT INTO members (user_id, project_id, role) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(user_id)
    .bind(project_id)
    .bind(role)
    .fetch_one(ex)
    .await
}

pub async fn list_for_user<'e>(
    ex: impl PgExecutor<'e>,
    user_id: Uuid,
) -> Result<Vec<Member>, sqlx::Error> {
    sqlx::query_as::<_, Member>("SELECT * FROM members WHERE user_id = $1")
        .bind(user_id)
        .fetch_all(ex)
        .await
}

pub async fn list_for_project<'e>(
    ex: impl PgExecutor<'e>,
    project_id: Uuid,
) -> Result<Vec<Member>, sqlx::Error> {
    sqlx::query_as::<_, Member>("SELECT * FROM members WHERE project_id = $1")
        .bind(project_id)
        .fetch_all(ex)
        .await
}

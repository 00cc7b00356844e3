use sqlx::PgExecutor;
use uuid::Uuid;

use crate::database::models::Profile;

pub async fn insert<'e>(
    ex: impl PgExecutor<'e>,
    user_id: Uuid,
    name: &str,
    lastname: &str,
) -> Result<Profile, sqlx::Error> {
    sqlx::query_as::<_, Profile>(
        "INSERT INTO profiles (user_id, name, lastname) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(user_id)
    .bind(name)
    .bind(lastname)
    .fetch_one(ex)
    .await
}

pub async fn find_by_user<'e>(
    ex: impl PgExecutor<'e>,
    user_id: Uuid,
) -> Result<Option<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(ex)
        .await
}

pub async fn update_names<'e>(
    ex: impl PgExecutor<'e>,
    user_id: Uuid,
    name: &str,
    lastname: &str,
) -> Result<Option<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>(
        "UPDATE profiles SET name = $2, lastname = $3 WHERE user_id = $1 RETURNING *",
    )
    .bind(user_id)
    .bind(name)
    .bind(lastname)
    .fetch_optional(ex)
    .await
}

pub async fn update_details<'e>(
    ex: impl PgExecutor<'e>,
    user_id: Uuid,
    description: Option<&str>,
    photo: Option<&str>,
    gender: Option<&str>,
) -> Result<Option<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>(
        "UPDATE profiles SET description = $2, photo = $3, gender = $4 WHERE user_id = $1 RETURNING *",
    )
    .bind(user_id)
    .bind(description)
    .bind(photo)
    .bind(gender)
    .fetch_optional(ex)
    .await
}

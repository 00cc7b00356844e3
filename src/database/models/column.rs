use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A named bucket on a project's task board. Tasks belong to exactly one
/// column at a time; deleting a column deletes its tasks first.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Column {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
}

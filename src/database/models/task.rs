use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_priority", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: Uuid,
    /// Creator/assignee.
    pub user_id: Uuid,
    pub project_id: Uuid,
    pub column_id: Uuid,
    /// Optional members-row assignment.
    pub member_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    /// Completion flag. Workflow position is whichever column the task is in.
    pub check_in: bool,
    pub start_date: DateTime<Utc>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<TaskPriority>,
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A checklist item hanging off a task. Not exposed by any route yet;
/// carried in the schema because task deletion must sweep these up first.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Subtask {
    pub id: Uuid,
    pub user_id: Uuid,
    pub task_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_parent_task_reference() {
        let subtask = Subtask {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            task_id: Uuid::new_v4(),
            name: "write release notes".to_string(),
            description: None,
            due_date: None,
        };
        let value = serde_json::to_value(&subtask).unwrap();
        assert_eq!(value["task_id"], subtask.task_id.to_string());
        assert_eq!(value["name"], "write release notes");
    }
}

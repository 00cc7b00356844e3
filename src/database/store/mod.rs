pub mod columns;
pub mod members;
pub mod profiles;
pub mod projects;
pub mod subtasks;
pub mod tasks;
pub mod users;

pub mod profile;
pub mod projects;
pub mod tasks;

pub mod auth;
pub mod columns;
pub mod users;

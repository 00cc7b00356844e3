// handlers/mod.rs - Two-tier handler layout
//
// Public (no auth): registration, login, user search, board columns.
// Protected (bearer JWT): projects, profiles, tasks.

pub mod protected;
pub mod public;

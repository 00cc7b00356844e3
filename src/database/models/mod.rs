pub mod column;
pub mod member;
pub mod profile;
pub mod project;
pub mod subtask;
pub mod task;
pub mod user;

pub use column::Column;
pub use member::{Member, MemberRole};
pub use profile::Profile;
pub use project::{Project, ProjectStatus};
pub use subtask::Subtask;
pub use task::{Task, TaskPriority};
pub use user::User;

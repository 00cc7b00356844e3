use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "member_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Admin,
    User,
}

impl MemberRole {
    /// Role flag carried on project invitations. The frontend sends the
    /// literal string "Usuario" for plain members; anything else grants admin.
    /// Case-sensitive by contract.
    pub fn from_invite_flag(flag: &str) -> Self {
        if flag == "Usuario" {
            MemberRole::User
        } else {
            MemberRole::Admin
        }
    }
}

/// Join row granting a user a role within a project.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub id: Uuid,
    pub user_id: Uuid,
    pub project_id: Uuid,
    pub role: MemberRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invite_flag_maps_usuario_to_user() {
        assert_eq!(MemberRole::from_invite_flag("Usuario"), MemberRole::User);
    }

    #[test]
    fn invite_flag_is_case_sensitive() {
        assert_eq!(MemberRole::from_invite_flag("usuario"), MemberRole::Admin);
        assert_eq!(MemberRole::from_invite_flag("Admin"), MemberRole::Admin);
        assert_eq!(MemberRole::from_invite_flag(""), MemberRole::Admin);
    }
}

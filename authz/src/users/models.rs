//! User models.

use chrono::{DateTime, Utc};
use maestro_common::{Role, UserStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::permissions::{PermissionGrant, PermissionSet};

/// Job title given to invited users that did not provide one.
pub const DEFAULT_JOB_TITLE: &str = "Usuário";

/// Dashboard user.
///
/// Role and grant are private: every change goes through [`User::regrant`],
/// which keeps the grant normalized against the role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UserRecord", into = "UserRecord")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub job_title: String,
    role: Role,
    grant: PermissionGrant,
    pub status: UserStatus,
    /// `None` when the user never signed in.
    pub last_access: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a pending user holding the default permissions of `role`.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        job_title: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            email: email.into(),
            job_title: job_title.into(),
            role,
            grant: PermissionGrant::Default,
            status: UserStatus::Pending,
            last_access: None,
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub const fn grant(&self) -> PermissionGrant {
        self.grant
    }

    /// Effective permission set.
    #[must_use]
    pub const fn permissions(&self) -> PermissionSet {
        self.grant.resolve(self.role)
    }

    /// Copy of this user with `role` and `permissions` replacing the current ones.
    #[must_use]
    pub fn regrant(&self, role: Role, permissions: PermissionSet) -> Self {
        Self {
            role,
            grant: PermissionGrant::for_role(role, permissions),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_last_access(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.last_access = at;
        self
    }

    #[must_use]
    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    #[must_use]
    pub fn with_permissions(self, permissions: PermissionSet) -> Self {
        self.regrant(self.role, permissions)
    }

    /// Two-letter avatar initials.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Flat wire shape of a [`User`], with the grant collapsed to a permission list.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserRecord {
    id: Uuid,
    name: String,
    email: String,
    job_title: String,
    role: Role,
    permissions: PermissionSet,
    status: UserStatus,
    last_access: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        Self {
            permissions: user.permissions(),
            id: user.id,
            name: user.name,
            email: user.email,
            job_title: user.job_title,
            role: user.role,
            status: user.status,
            last_access: user.last_access,
            created_at: user.created_at,
        }
    }
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            job_title: record.job_title,
            role: record.role,
            grant: PermissionGrant::for_role(record.role, record.permissions),
            status: record.status,
            last_access: record.last_access,
            created_at: record.created_at,
        }
    }
}

/// Invitation of a new user from the administration screen.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InviteUserRequest {
    /// Full name (1-100 characters).
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    /// Job title (optional, defaults to [`DEFAULT_JOB_TITLE`]).
    #[validate(length(max = 100))]
    pub job_title: Option<String>,
    /// Role (optional, defaults to viewer).
    #[serde(default)]
    pub role: Option<Role>,
}

impl InviteUserRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            job_title: None,
            role: None,
        }
    }

    #[must_use]
    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = Some(job_title.into());
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }
}

#[cfg(test)]
mod tests {
    use maestro_common::Permission;

    use super::*;

    #[test]
    fn test_new_user_is_pending_with_role_defaults() {
        let user = User::new("Ana Santos", "ana@empresa.com", "Analista", Role::Operator);
        assert_eq!(user.status, UserStatus::Pending);
        assert_eq!(user.last_access, None);
        assert_eq!(user.grant(), PermissionGrant::Default);
        assert_eq!(user.permissions(), PermissionSet::OPERATOR_DEFAULT);
    }

    #[test]
    fn test_regrant_does_not_touch_original() {
        let user = User::new("Ana Santos", "ana@empresa.com", "Analista", Role::Viewer);
        let promoted = user.regrant(Role::Admin, PermissionSet::all());

        assert_eq!(user.role(), Role::Viewer);
        assert_eq!(user.permissions(), PermissionSet::VIEWER_DEFAULT);
        assert_eq!(promoted.role(), Role::Admin);
        assert_eq!(promoted.grant(), PermissionGrant::Default);
        assert_eq!(promoted.id, user.id);
    }

    #[test]
    fn test_initials() {
        let user = User::new("pedro de oliveira", "p@empresa.com", "Dev", Role::Viewer);
        assert_eq!(user.initials(), "PD");

        let single = User::new("Lucia", "l@empresa.com", "Dev", Role::Viewer);
        assert_eq!(single.initials(), "L");
    }

    #[test]
    fn test_serializes_flat_permission_list() {
        let user = User::new("Ana Santos", "ana@empresa.com", "Analista", Role::Viewer)
            .with_permissions(PermissionSet::VIEWER_DEFAULT | PermissionSet::LOGS_EXPORT);

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "viewer");
        assert_eq!(json["status"], "pending");
        assert_eq!(
            json["permissions"],
            serde_json::json!([
                "bots.visualizar",
                "agenda.visualizar",
                "logs.visualizar",
                "logs.exportar"
            ])
        );
        assert!(json["last_access"].is_null());

        let back: User = serde_json::from_value(json).unwrap();
        assert_eq!(back, user);
        assert!(back.permissions().has(Permission::LogsExport));
    }

    #[test]
    fn test_deserialized_default_set_is_not_custom() {
        let user = User::new("Ana Santos", "ana@empresa.com", "Analista", Role::Manager);
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back.grant(), PermissionGrant::Default);
    }

    #[test]
    fn test_deserialize_rejects_unknown_role() {
        let user = User::new("Ana Santos", "ana@empresa.com", "Analista", Role::Manager);
        let mut json = serde_json::to_value(&user).unwrap();
        json["role"] = "owner".into();
        assert!(serde_json::from_value::<User>(json).is_err());
    }

    #[test]
    fn test_invite_request_validation() {
        assert!(InviteUserRequest::new("Ana", "ana@empresa.com")
            .validate()
            .is_ok());
        assert!(InviteUserRequest::new("", "ana@empresa.com")
            .validate()
            .is_err());
        assert!(InviteUserRequest::new("Ana", "not-an-email")
            .validate()
            .is_err());
        assert!(InviteUserRequest::new("Ana", "ana@empresa.com")
            .with_job_title("x".repeat(101))
            .validate()
            .is_err());
    }
}

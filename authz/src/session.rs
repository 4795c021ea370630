//! Current-user access context.
//!
//! The context owns the single active identity and answers permission
//! queries against it. It is created when a session starts and passed
//! explicitly to whatever needs to gate an action; there is no global slot.

use std::fmt;

use maestro_common::{Permission, Role};

use crate::error::{AuthzError, AuthzResult};
use crate::permissions::PermissionSet;
use crate::users::User;

/// What an action needs from the current user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessRequirement {
    /// No requirement; granted even without a current user.
    Always,
    Single(Permission),
    AnyOf(Vec<Permission>),
    AllOf(Vec<Permission>),
}

impl fmt::Display for AccessRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(perms: &[Permission]) -> String {
            perms
                .iter()
                .map(Permission::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        }

        match self {
            Self::Always => f.write_str("nothing"),
            Self::Single(p) => write!(f, "{p}"),
            Self::AnyOf(ps) => write!(f, "any of [{}]", join(ps)),
            Self::AllOf(ps) => write!(f, "all of [{}]", join(ps)),
        }
    }
}

/// Session holding the current user, if any.
#[derive(Debug, Clone, Default)]
pub struct AccessContext {
    current: Option<User>,
}

impl AccessContext {
    #[must_use]
    pub const fn new(current: Option<User>) -> Self {
        Self { current }
    }

    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Replace the current user wholesale. Any user value is accepted.
    pub fn set_current_user(&mut self, user: Option<User>) {
        match &user {
            Some(u) => tracing::info!(user_id = %u.id, role = %u.role(), "Current user switched"),
            None => tracing::info!("Current user cleared"),
        }
        self.current = user;
    }

    fn permissions(&self) -> Option<PermissionSet> {
        self.current.as_ref().map(User::permissions)
    }

    /// False when there is no current user.
    #[must_use]
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions().is_some_and(|held| held.has(permission))
    }

    /// False when there is no current user or `permissions` is empty.
    #[must_use]
    pub fn has_any_permission(&self, permissions: &[Permission]) -> bool {
        self.permissions()
            .is_some_and(|held| permissions.iter().any(|p| held.has(*p)))
    }

    /// False when there is no current user; true for an empty list otherwise.
    #[must_use]
    pub fn has_all_permissions(&self, permissions: &[Permission]) -> bool {
        self.permissions()
            .is_some_and(|held| permissions.iter().all(|p| held.has(*p)))
    }

    /// Role check only; holding every admin permission does not make a user admin.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|u| u.role() == Role::Admin)
    }

    #[must_use]
    pub fn check(&self, requirement: &AccessRequirement) -> bool {
        match requirement {
            AccessRequirement::Always => true,
            AccessRequirement::Single(p) => self.has_permission(*p),
            AccessRequirement::AnyOf(ps) => self.has_any_permission(ps),
            AccessRequirement::AllOf(ps) => self.has_all_permissions(ps),
        }
    }

    /// Like [`AccessContext::check`], but reports why access was denied.
    pub fn require(&self, requirement: &AccessRequirement) -> AuthzResult<()> {
        if self.check(requirement) {
            return Ok(());
        }
        if self.current.is_none() {
            tracing::debug!(%requirement, "Access denied without current user");
            return Err(AuthzError::NoCurrentUser);
        }
        tracing::debug!(%requirement, "Access denied");
        Err(AuthzError::Forbidden(requirement.clone()))
    }
}

//! Default-or-custom permission grants.

use maestro_common::Role;

use super::set::{resolve_default_permissions, PermissionSet};

/// Permissions held by a user, relative to their role.
///
/// `Custom` never holds a set equal to the role defaults: [`PermissionGrant::for_role`]
/// collapses such a set back to `Default`, so a grant is customized exactly
/// when it is `Custom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PermissionGrant {
    /// Whatever the role defaults are.
    #[default]
    Default,
    /// An explicit set that differs from the role defaults.
    Custom(PermissionSet),
}

impl PermissionGrant {
    /// Build the grant for `permissions` held under `role`.
    #[must_use]
    pub fn for_role(role: Role, permissions: PermissionSet) -> Self {
        if permissions == resolve_default_permissions(role) {
            Self::Default
        } else {
            Self::Custom(permissions)
        }
    }

    /// Flatten the grant into the effective permission set for `role`.
    #[must_use]
    pub const fn resolve(self, role: Role) -> PermissionSet {
        match self {
            Self::Default => resolve_default_permissions(role),
            Self::Custom(permissions) => permissions,
        }
    }

    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_collapse_to_default_grant() {
        for role in Role::all() {
            let grant = PermissionGrant::for_role(*role, resolve_default_permissions(*role));
            assert_eq!(grant, PermissionGrant::Default);
        }
    }

    #[test]
    fn test_diverging_set_is_custom() {
        let perms = PermissionSet::VIEWER_DEFAULT | PermissionSet::BOTS_EDIT;
        let grant = PermissionGrant::for_role(Role::Viewer, perms);
        assert_eq!(grant, PermissionGrant::Custom(perms));
        assert_eq!(grant.resolve(Role::Viewer), perms);
    }

    #[test]
    fn test_default_resolves_against_role() {
        let grant = PermissionGrant::Default;
        assert_eq!(grant.resolve(Role::Manager), PermissionSet::MANAGER_DEFAULT);
        assert_eq!(grant.resolve(Role::Viewer), PermissionSet::VIEWER_DEFAULT);
    }

    #[test]
    fn test_empty_set_is_a_valid_custom_grant() {
        let grant = PermissionGrant::for_role(Role::Operator, PermissionSet::empty());
        assert!(grant.is_custom());
        assert!(grant.resolve(Role::Operator).is_empty());
    }
}

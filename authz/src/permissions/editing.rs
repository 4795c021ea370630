//! Pure editing operations behind the user edit form.
//!
//! None of these mutate their input; the caller commits the returned user
//! through a single explicit save.

use maestro_common::{Permission, Role};
use serde::Serialize;

use super::set::{resolve_default_permissions, PermissionSet};
use crate::users::User;

/// Change a user's role.
///
/// With `preserve_custom` unset the permissions reset to the new role's
/// defaults. With it set the permission set is kept as is; no reconciliation
/// against the new role is attempted.
#[must_use]
pub fn apply_role_change(user: &User, new_role: Role, preserve_custom: bool) -> User {
    let permissions = if preserve_custom {
        user.permissions()
    } else {
        resolve_default_permissions(new_role)
    };
    user.regrant(new_role, permissions)
}

/// Add `permission` if absent, remove it if present.
#[must_use]
pub fn toggle_permission(user: &User, permission: Permission) -> User {
    let permissions = user.permissions() ^ PermissionSet::from(permission);
    user.regrant(user.role(), permissions)
}

/// Whether the user's permissions differ from their role defaults.
#[must_use]
pub const fn is_customized(user: &User) -> bool {
    user.grant().is_custom()
}

/// Drop any customization, going back to the role defaults.
#[must_use]
pub fn restore_default_permissions(user: &User) -> User {
    user.regrant(user.role(), resolve_default_permissions(user.role()))
}

/// Permissions a user holds beyond, or lacks relative to, their role defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PermissionDiff {
    pub added: Vec<Permission>,
    pub removed: Vec<Permission>,
}

impl PermissionDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

#[must_use]
pub fn permission_diff(user: &User) -> PermissionDiff {
    let defaults = resolve_default_permissions(user.role());
    let held = user.permissions();
    PermissionDiff {
        added: held.difference(defaults).to_vec(),
        removed: defaults.difference(held).to_vec(),
    }
}

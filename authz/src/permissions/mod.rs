//! Permission model.
//!
//! - Permission sets: bitflags over the closed permission vocabulary
//! - Role defaults: the static grant bundle of every role
//! - Grants: default-or-custom permissions held by a user
//! - Editing: pure role change / toggle / restore operations on users

pub mod editing;
pub mod grant;
pub mod set;

pub use editing::{
    apply_role_change, is_customized, permission_diff, restore_default_permissions,
    toggle_permission, PermissionDiff,
};
pub use grant::PermissionGrant;
pub use set::{parse_permissions, resolve_default_permissions, PermissionSet};

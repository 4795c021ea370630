//! Permission sets using bitflags.
//!
//! Bits follow the declaration order of [`Permission`]:
//! - Bots (bits 0-4)
//! - Agenda (bits 5-8)
//! - Logs (bits 9-11)
//! - Sistema (bits 12-14)

use bitflags::bitflags;
use maestro_common::{Permission, Role};

use crate::error::AuthzResult;

bitflags! {
    /// Unordered set of permissions.
    ///
    /// Serialized as a list of permission tags in declaration order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(from = "Vec<Permission>", into = "Vec<Permission>")]
    pub struct PermissionSet: u32 {
        // === Bots (bits 0-4) ===
        const BOTS_VIEW       = 1 << 0;
        const BOTS_CREATE     = 1 << 1;
        const BOTS_EDIT       = 1 << 2;
        const BOTS_DELETE     = 1 << 3;
        const BOTS_EXECUTE    = 1 << 4;

        // === Agenda (bits 5-8) ===
        const AGENDA_VIEW     = 1 << 5;
        const AGENDA_CREATE   = 1 << 6;
        const AGENDA_EDIT     = 1 << 7;
        const AGENDA_DELETE   = 1 << 8;

        // === Logs (bits 9-11) ===
        const LOGS_VIEW       = 1 << 9;
        const LOGS_EXPORT     = 1 << 10;
        const LOGS_CONFIGURE  = 1 << 11;

        // === Sistema (bits 12-14) ===
        const SYSTEM_USERS    = 1 << 12;
        const SYSTEM_SETTINGS = 1 << 13;
        const SYSTEM_ALERTS   = 1 << 14;
    }
}

impl PermissionSet {
    // === Role Defaults ===

    /// Read-only access to bots, schedules and logs.
    pub const VIEWER_DEFAULT: Self = Self::BOTS_VIEW
        .union(Self::AGENDA_VIEW)
        .union(Self::LOGS_VIEW);

    /// Viewer access plus running bots.
    pub const OPERATOR_DEFAULT: Self = Self::VIEWER_DEFAULT.union(Self::BOTS_EXECUTE);

    /// Operator access plus bot and schedule management, log export and alerts.
    ///
    /// Managers cannot delete bots, configure logging or administer the platform.
    pub const MANAGER_DEFAULT: Self = Self::OPERATOR_DEFAULT
        .union(Self::BOTS_CREATE)
        .union(Self::BOTS_EDIT)
        .union(Self::AGENDA_CREATE)
        .union(Self::AGENDA_EDIT)
        .union(Self::AGENDA_DELETE)
        .union(Self::LOGS_EXPORT)
        .union(Self::SYSTEM_ALERTS);

    /// Every permission.
    pub const ADMIN_DEFAULT: Self = Self::all();

    /// Flag for a single permission.
    #[must_use]
    pub const fn of(permission: Permission) -> Self {
        match permission {
            Permission::BotsView => Self::BOTS_VIEW,
            Permission::BotsCreate => Self::BOTS_CREATE,
            Permission::BotsEdit => Self::BOTS_EDIT,
            Permission::BotsDelete => Self::BOTS_DELETE,
            Permission::BotsExecute => Self::BOTS_EXECUTE,
            Permission::AgendaView => Self::AGENDA_VIEW,
            Permission::AgendaCreate => Self::AGENDA_CREATE,
            Permission::AgendaEdit => Self::AGENDA_EDIT,
            Permission::AgendaDelete => Self::AGENDA_DELETE,
            Permission::LogsView => Self::LOGS_VIEW,
            Permission::LogsExport => Self::LOGS_EXPORT,
            Permission::LogsConfigure => Self::LOGS_CONFIGURE,
            Permission::SystemUsers => Self::SYSTEM_USERS,
            Permission::SystemSettings => Self::SYSTEM_SETTINGS,
            Permission::SystemAlerts => Self::SYSTEM_ALERTS,
        }
    }

    /// Check whether the set grants `permission`.
    ///
    /// # Examples
    ///
    /// ```
    /// use maestro_authz::{Permission, PermissionSet};
    ///
    /// let perms = PermissionSet::OPERATOR_DEFAULT;
    /// assert!(perms.has(Permission::BotsExecute));
    /// assert!(!perms.has(Permission::BotsDelete));
    /// ```
    #[must_use]
    pub const fn has(self, permission: Permission) -> bool {
        self.contains(Self::of(permission))
    }

    /// Permissions in the set, in declaration order.
    pub fn permissions(self) -> impl Iterator<Item = Permission> {
        Permission::all()
            .iter()
            .copied()
            .filter(move |p| self.has(*p))
    }

    #[must_use]
    pub fn to_vec(self) -> Vec<Permission> {
        self.permissions().collect()
    }
}

impl Default for PermissionSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Permission> for PermissionSet {
    fn from(permission: Permission) -> Self {
        Self::of(permission)
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |acc, p| acc.union(Self::of(p)))
    }
}

impl<'a> FromIterator<&'a Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = &'a Permission>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl From<Vec<Permission>> for PermissionSet {
    fn from(permissions: Vec<Permission>) -> Self {
        permissions.into_iter().collect()
    }
}

impl From<PermissionSet> for Vec<Permission> {
    fn from(set: PermissionSet) -> Self {
        set.to_vec()
    }
}

/// Default grant bundle of a role.
///
/// Pure lookup into the static role table; total over the closed role set.
#[must_use]
pub const fn resolve_default_permissions(role: Role) -> PermissionSet {
    match role {
        Role::Admin => PermissionSet::ADMIN_DEFAULT,
        Role::Manager => PermissionSet::MANAGER_DEFAULT,
        Role::Operator => PermissionSet::OPERATOR_DEFAULT,
        Role::Viewer => PermissionSet::VIEWER_DEFAULT,
    }
}

/// Parse permission tags, failing on the first tag outside the vocabulary.
pub fn parse_permissions<S: AsRef<str>>(tags: &[S]) -> AuthzResult<PermissionSet> {
    tags.iter()
        .map(|tag| tag.as_ref().parse::<Permission>().map_err(Into::into))
        .collect()
}

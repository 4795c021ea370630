//! Maestro Access Control
//!
//! Role and permission model of the Maestro bot automation dashboard:
//! role defaults, per-user overrides, the current-user access context and the
//! in-memory user directory behind the administration screen.

pub mod config;
pub mod console;
pub mod error;
pub mod observability;
pub mod permissions;
pub mod session;
pub mod users;

pub use error::{AuthzError, AuthzResult};
pub use maestro_common::{Permission, PermissionCategory, Role, UserStatus};
pub use permissions::{PermissionGrant, PermissionSet};
pub use session::{AccessContext, AccessRequirement};
pub use users::{User, UserDirectory};

//! Shared Types

pub mod permission;
pub mod role;
pub mod user;

pub use permission::{Permission, PermissionCategory};
pub use role::Role;
pub use user::UserStatus;

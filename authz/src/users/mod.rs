//! User accounts and the in-memory user directory.

pub mod directory;
pub mod models;
pub mod seed;

pub use directory::{StatusCounts, UserDirectory};
pub use models::{InviteUserRequest, User};
pub use seed::seed_users;

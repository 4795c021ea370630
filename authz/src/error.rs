//! Authorization Error Types

use uuid::Uuid;

use crate::session::AccessRequirement;

#[derive(Debug, thiserror::Error)]
pub enum AuthzError {
    #[error("No user is signed in")]
    NoCurrentUser,

    #[error("Access denied: requires {0}")]
    Forbidden(AccessRequirement),

    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("No user with email {0}")]
    UnknownEmail(String),

    #[error("A user with email {0} already exists")]
    DuplicateEmail(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    InvalidEnum(#[from] maestro_common::Error),
}

pub type AuthzResult<T> = Result<T, AuthzError>;

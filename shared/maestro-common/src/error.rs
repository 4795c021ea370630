//! Common Error Types

/// Errors raised while interpreting the shared vocabularies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A tag outside a closed enumeration (role, permission, category, status).
    #[error("invalid {kind}: {value:?}")]
    InvalidEnum {
        /// Which vocabulary was being parsed.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

impl Error {
    pub(crate) fn invalid(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidEnum {
            kind,
            value: value.into(),
        }
    }
}

/// Result alias for vocabulary parsing.
pub type Result<T> = std::result::Result<T, Error>;

//! Console Configuration
//!
//! Loads configuration from environment variables.

use std::env;
use std::str::FromStr;

use anyhow::{bail, Result};

use crate::users::{User, UserDirectory};

/// Default tracing filter when neither `MAESTRO_LOG_FILTER` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "maestro_authz=info";

/// Which user a new session starts with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DefaultUser {
    /// First user of the directory (the administrator in the demo data).
    #[default]
    FirstListed,
    /// Start without a current user.
    Nobody,
    /// User with this email.
    Email(String),
}

impl DefaultUser {
    /// Pick the starting user out of `directory`.
    ///
    /// An email that matches nobody starts the session without a user.
    #[must_use]
    pub fn resolve(&self, directory: &UserDirectory) -> Option<User> {
        match self {
            Self::FirstListed => directory.list().first().cloned(),
            Self::Nobody => None,
            Self::Email(email) => {
                let user = directory.find_by_email(email).cloned();
                if user.is_none() {
                    tracing::warn!(
                        %email,
                        "Configured default user not found, starting without one"
                    );
                }
                user
            }
        }
    }
}

impl FromStr for DefaultUser {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s {
            "" => Self::FirstListed,
            "none" => Self::Nobody,
            email => Self::Email(email.to_string()),
        })
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => bail!("MAESTRO_LOG_FORMAT must be 'json' or 'pretty', got {other:?}"),
        }
    }
}

/// Console configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Starting user (`MAESTRO_DEFAULT_USER`: an email, or `none`)
    pub default_user: DefaultUser,

    /// Log output format (`MAESTRO_LOG_FORMAT`, default: json)
    pub log_format: LogFormat,

    /// Tracing filter directive (`MAESTRO_LOG_FILTER`, then `RUST_LOG`)
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_user: DefaultUser::default(),
            log_format: LogFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let default_user: DefaultUser = env::var("MAESTRO_DEFAULT_USER")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        let log_format: LogFormat = match env::var("MAESTRO_LOG_FORMAT") {
            Ok(v) => v.parse()?,
            Err(_) => LogFormat::default(),
        };
        let log_filter = env::var("MAESTRO_LOG_FILTER")
            .or_else(|_| env::var("RUST_LOG"))
            .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

        Ok(Self {
            default_user,
            log_format,
            log_filter,
        })
    }
}

//! User Types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Account lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "&'static str")]
pub enum UserStatus {
    /// Account is in use.
    Active,
    /// Account was disabled by an administrator.
    Inactive,
    /// Invited but never activated.
    #[default]
    Pending,
}

impl UserStatus {
    /// Returns every status.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Active, Self::Inactive, Self::Pending]
    }

    /// Wire tag of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }

    /// Display label shown in the dashboard.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Active => "Ativo",
            Self::Inactive => "Inativo",
            Self::Pending => "Pendente",
        }
    }

    /// Status reached by the activate/deactivate switch.
    ///
    /// Active accounts are deactivated; inactive and pending accounts are
    /// activated.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive | Self::Pending => Self::Active,
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::invalid("user status", s))
    }
}

impl TryFrom<String> for UserStatus {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UserStatus> for &'static str {
    fn from(status: UserStatus) -> Self {
        status.as_str()
    }
}

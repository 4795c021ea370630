//! User Roles
//!
//! A role is the coarse job function of a user. It selects the default
//! permission bundle; it never grants anything on its own except the
//! administrator check.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Job-function role assigned to every user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Role {
    /// Full access to the platform.
    Admin,
    /// Manages bots and schedules, reads and exports logs.
    Manager,
    /// Runs bots and follows their execution.
    Operator,
    /// Read-only access.
    Viewer,
}

impl Role {
    /// Returns every role, most privileged first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Admin, Self::Manager, Self::Operator, Self::Viewer]
    }

    /// Wire tag of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Operator => "operator",
            Self::Viewer => "viewer",
        }
    }

    /// Display label shown in the dashboard.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Administrador",
            Self::Manager => "Gerente",
            Self::Operator => "Operador",
            Self::Viewer => "Visualizador",
        }
    }

    /// Short description of what the role is for.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Admin => "Acesso total ao sistema",
            Self::Manager => "Gerencia bots, agendas e relatórios",
            Self::Operator => "Executa e monitora bots",
            Self::Viewer => "Apenas visualização",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| Error::invalid("role", s))
    }
}

impl TryFrom<String> for Role {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for &'static str {
    fn from(role: Role) -> Self {
        role.as_str()
    }
}

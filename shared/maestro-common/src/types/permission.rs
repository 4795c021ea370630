//! Permission Vocabulary
//!
//! Fine-grained capability tags, grouped into categories:
//! - Bots: bot management and execution
//! - Agenda: schedule management
//! - Logs: execution log access
//! - Sistema: platform administration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Permission category, used to group permissions in editing forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum PermissionCategory {
    Bots,
    Agenda,
    Logs,
    Sistema,
}

impl PermissionCategory {
    /// Returns every category in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Bots, Self::Agenda, Self::Logs, Self::Sistema]
    }

    /// Wire tag, also the prefix of every permission in the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bots => "bots",
            Self::Agenda => "agenda",
            Self::Logs => "logs",
            Self::Sistema => "sistema",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bots => "Bots",
            Self::Agenda => "Agenda",
            Self::Logs => "Logs",
            Self::Sistema => "Sistema",
        }
    }

    /// Permissions belonging to this category, in declaration order.
    pub fn permissions(self) -> impl Iterator<Item = Permission> {
        Permission::all()
            .iter()
            .copied()
            .filter(move |p| p.category() == self)
    }
}

impl fmt::Display for PermissionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::invalid("permission category", s))
    }
}

impl TryFrom<String> for PermissionCategory {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PermissionCategory> for &'static str {
    fn from(category: PermissionCategory) -> Self {
        category.as_str()
    }
}

/// Capability tag gating a single dashboard action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Permission {
    // === Bots ===
    /// View bot list and details
    BotsView,
    /// Register new bots
    BotsCreate,
    /// Edit bot configuration
    BotsEdit,
    /// Delete bots
    BotsDelete,
    /// Start and stop bot executions
    BotsExecute,

    // === Agenda ===
    /// View schedules
    AgendaView,
    /// Create schedules
    AgendaCreate,
    /// Edit schedules
    AgendaEdit,
    /// Delete schedules
    AgendaDelete,

    // === Logs ===
    /// Read execution logs and history
    LogsView,
    /// Export logs
    LogsExport,
    /// Change log retention and verbosity
    LogsConfigure,

    // === Sistema ===
    /// Manage users, roles and permissions
    SystemUsers,
    /// Change platform settings
    SystemSettings,
    /// Manage alert rules
    SystemAlerts,
}

impl Permission {
    /// Returns every permission, grouped by category.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::BotsView,
            Self::BotsCreate,
            Self::BotsEdit,
            Self::BotsDelete,
            Self::BotsExecute,
            Self::AgendaView,
            Self::AgendaCreate,
            Self::AgendaEdit,
            Self::AgendaDelete,
            Self::LogsView,
            Self::LogsExport,
            Self::LogsConfigure,
            Self::SystemUsers,
            Self::SystemSettings,
            Self::SystemAlerts,
        ]
    }

    /// Dotted wire tag (`<category>.<action>`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BotsView => "bots.visualizar",
            Self::BotsCreate => "bots.criar",
            Self::BotsEdit => "bots.editar",
            Self::BotsDelete => "bots.excluir",
            Self::BotsExecute => "bots.executar",
            Self::AgendaView => "agenda.visualizar",
            Self::AgendaCreate => "agenda.criar",
            Self::AgendaEdit => "agenda.editar",
            Self::AgendaDelete => "agenda.excluir",
            Self::LogsView => "logs.visualizar",
            Self::LogsExport => "logs.exportar",
            Self::LogsConfigure => "logs.configurar",
            Self::SystemUsers => "sistema.usuarios",
            Self::SystemSettings => "sistema.configuracoes",
            Self::SystemAlerts => "sistema.alertas",
        }
    }

    /// Display label shown next to the permission checkbox.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::BotsView => "Visualizar bots",
            Self::BotsCreate => "Criar bots",
            Self::BotsEdit => "Editar bots",
            Self::BotsDelete => "Excluir bots",
            Self::BotsExecute => "Executar bots",
            Self::AgendaView => "Visualizar agenda",
            Self::AgendaCreate => "Criar agendamentos",
            Self::AgendaEdit => "Editar agendamentos",
            Self::AgendaDelete => "Excluir agendamentos",
            Self::LogsView => "Visualizar logs",
            Self::LogsExport => "Exportar logs",
            Self::LogsConfigure => "Configurar logs",
            Self::SystemUsers => "Gerenciar usuários",
            Self::SystemSettings => "Configurações do sistema",
            Self::SystemAlerts => "Gerenciar alertas",
        }
    }

    #[must_use]
    pub const fn category(&self) -> PermissionCategory {
        match self {
            Self::BotsView
            | Self::BotsCreate
            | Self::BotsEdit
            | Self::BotsDelete
            | Self::BotsExecute => PermissionCategory::Bots,
            Self::AgendaView | Self::AgendaCreate | Self::AgendaEdit | Self::AgendaDelete => {
                PermissionCategory::Agenda
            }
            Self::LogsView | Self::LogsExport | Self::LogsConfigure => PermissionCategory::Logs,
            Self::SystemUsers | Self::SystemSettings | Self::SystemAlerts => {
                PermissionCategory::Sistema
            }
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::invalid("permission", s))
    }
}

impl TryFrom<String> for Permission {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Permission> for &'static str {
    fn from(permission: Permission) -> Self {
        permission.as_str()
    }
}

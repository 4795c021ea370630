//! Demo users loaded into a fresh directory.

use chrono::{DateTime, TimeZone, Utc};
use maestro_common::{Role, UserStatus};
use uuid::Uuid;

use super::models::User;
use crate::permissions::PermissionSet;

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// The six demo accounts, administrator first.
///
/// Ids are fixed (`1..=6`) so a seeded directory is reproducible.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(
            "Carlos Silva",
            "carlos.silva@empresa.com",
            "Administrador",
            Role::Admin,
        )
        .with_id(Uuid::from_u128(1))
        .with_status(UserStatus::Active)
        .with_last_access(Some(at(2024, 1, 15, 14, 32)))
        .with_created_at(at(2023, 6, 15, 0, 0)),
        User::new(
            "Ana Santos",
            "ana.santos@empresa.com",
            "Analista de Automação",
            Role::Operator,
        )
        .with_id(Uuid::from_u128(2))
        .with_permissions(
            PermissionSet::OPERATOR_DEFAULT | PermissionSet::BOTS_EDIT | PermissionSet::LOGS_EXPORT,
        )
        .with_status(UserStatus::Active)
        .with_last_access(Some(at(2024, 1, 15, 11, 45)))
        .with_created_at(at(2023, 8, 22, 0, 0)),
        User::new(
            "Pedro Oliveira",
            "pedro.oliveira@empresa.com",
            "Desenvolvedor",
            Role::Operator,
        )
        .with_id(Uuid::from_u128(3))
        .with_status(UserStatus::Active)
        .with_last_access(Some(at(2024, 1, 14, 18, 20)))
        .with_created_at(at(2023, 9, 10, 0, 0)),
        User::new(
            "Maria Costa",
            "maria.costa@empresa.com",
            "Gerente de TI",
            Role::Manager,
        )
        .with_id(Uuid::from_u128(4))
        .with_status(UserStatus::Active)
        .with_last_access(Some(at(2024, 1, 15, 9, 15)))
        .with_created_at(at(2023, 5, 1, 0, 0)),
        User::new(
            "João Ferreira",
            "joao.ferreira@empresa.com",
            "Estagiário",
            Role::Viewer,
        )
        .with_id(Uuid::from_u128(5))
        .with_created_at(at(2024, 1, 10, 0, 0)),
        User::new(
            "Lucia Mendes",
            "lucia.mendes@empresa.com",
            "Analista de Dados",
            Role::Viewer,
        )
        .with_id(Uuid::from_u128(6))
        .with_status(UserStatus::Inactive)
        .with_last_access(Some(at(2023, 12, 10, 0, 0)))
        .with_created_at(at(2023, 7, 20, 0, 0)),
    ]
}

//! Command-line access console.
//!
//! Each invocation runs one command against a seeded directory and the
//! session's access context, and renders the answer as JSON.

use chrono::Utc;
use maestro_common::{Permission, PermissionCategory, Role};
use serde_json::{json, Value};

use crate::error::{AuthzError, AuthzResult};
use crate::permissions::{
    is_customized, parse_permissions, permission_diff, resolve_default_permissions,
};
use crate::session::AccessContext;
use crate::users::{User, UserDirectory};

pub const USAGE: &str = "usage: maestro [whoami | matrix | users [query] | \
    switch <email|none> | check <permission>... | defaults <role>]";

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    WhoAmI,
    Matrix,
    Users { query: Option<String> },
    /// Switch to the user with this email; `None` clears the current user.
    Switch { email: Option<String> },
    Check { permissions: Vec<Permission> },
    Defaults { role: Role },
}

impl Command {
    /// Parse the arguments following the program name. No arguments means `whoami`.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> AuthzResult<Self> {
        let mut args = args.iter().map(AsRef::as_ref);
        let Some(name) = args.next() else {
            return Ok(Self::WhoAmI);
        };
        let rest: Vec<&str> = args.collect();

        match (name, rest.as_slice()) {
            ("whoami", []) => Ok(Self::WhoAmI),
            ("matrix", []) => Ok(Self::Matrix),
            ("users", []) => Ok(Self::Users { query: None }),
            ("users", query) => Ok(Self::Users {
                query: Some(query.join(" ")),
            }),
            ("switch", ["none"]) => Ok(Self::Switch { email: None }),
            ("switch", [email]) => Ok(Self::Switch {
                email: Some((*email).to_string()),
            }),
            ("check", tags) if !tags.is_empty() => Ok(Self::Check {
                permissions: parse_permissions(tags)?.to_vec(),
            }),
            ("defaults", [role]) => Ok(Self::Defaults {
                role: role.parse()?,
            }),
            (other, _) => Err(AuthzError::Validation(format!(
                "unrecognized command or arguments for {other:?}; {USAGE}"
            ))),
        }
    }

    /// Run the command, returning its JSON rendering.
    #[tracing::instrument(skip(directory, ctx))]
    pub fn execute(
        self,
        directory: &mut UserDirectory,
        ctx: &mut AccessContext,
    ) -> AuthzResult<Value> {
        match self {
            Self::WhoAmI => Ok(describe_session(ctx)),
            Self::Matrix => Ok(role_matrix()),
            Self::Users { query } => {
                let users = directory.search(query.as_deref().unwrap_or_default());
                Ok(json!({
                    "counts": directory.counts(),
                    "users": users.into_iter().map(describe_user).collect::<Vec<_>>(),
                }))
            }
            Self::Switch { email: None } => {
                ctx.set_current_user(None);
                Ok(describe_session(ctx))
            }
            Self::Switch { email: Some(email) } => {
                let id = directory
                    .find_by_email(&email)
                    .map(|u| u.id)
                    .ok_or(AuthzError::UnknownEmail(email))?;
                directory.record_access(id, Utc::now())?;
                ctx.set_current_user(Some(directory.get(id)?.clone()));
                Ok(describe_session(ctx))
            }
            Self::Check { permissions } => {
                let each: serde_json::Map<String, Value> = permissions
                    .iter()
                    .map(|p| (p.as_str().to_string(), ctx.has_permission(*p).into()))
                    .collect();
                Ok(json!({
                    "user": ctx.current_user().map(|u| u.email.clone()),
                    "permissions": each,
                    "any": ctx.has_any_permission(&permissions),
                    "all": ctx.has_all_permissions(&permissions),
                }))
            }
            Self::Defaults { role } => Ok(describe_role(role)),
        }
    }
}

fn describe_user(user: &User) -> Value {
    json!({
        "user": user,
        "initials": user.initials(),
        "status_label": user.status.label(),
        "customized": is_customized(user),
        "diff": permission_diff(user),
    })
}

fn describe_session(ctx: &AccessContext) -> Value {
    match ctx.current_user() {
        Some(user) => json!({
            "current_user": describe_user(user),
            "is_admin": ctx.is_admin(),
        }),
        None => json!({ "current_user": null, "is_admin": false }),
    }
}

fn describe_role(role: Role) -> Value {
    let defaults = resolve_default_permissions(role);
    let by_category: serde_json::Map<String, Value> = PermissionCategory::all()
        .iter()
        .map(|category| {
            let granted: Vec<Value> = category
                .permissions()
                .filter(|p| defaults.has(*p))
                .map(|p| json!({ "permission": p, "label": p.label() }))
                .collect();
            let entry = json!({ "label": category.label(), "granted": granted });
            (category.as_str().to_string(), entry)
        })
        .collect();

    json!({
        "role": role,
        "label": role.label(),
        "description": role.description(),
        "permissions": defaults,
        "by_category": by_category,
    })
}

fn role_matrix() -> Value {
    Value::Array(Role::all().iter().copied().map(describe_role).collect())
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn session() -> (UserDirectory, AccessContext) {
        let directory = UserDirectory::seeded();
        let ctx = AccessContext::new(directory.list().first().cloned());
        (directory, ctx)
    }

    #[test]
    fn test_parse_commands() {
        let none: [&str; 0] = [];
        assert_eq!(Command::parse(&none).unwrap(), Command::WhoAmI);
        assert_eq!(Command::parse(&["matrix"]).unwrap(), Command::Matrix);
        assert_eq!(
            Command::parse(&["users", "analista", "de"]).unwrap(),
            Command::Users {
                query: Some("analista de".into())
            }
        );
        assert_eq!(
            Command::parse(&["switch", "none"]).unwrap(),
            Command::Switch { email: None }
        );
        assert_eq!(
            Command::parse(&["check", "bots.criar", "logs.exportar"]).unwrap(),
            Command::Check {
                permissions: vec![Permission::BotsCreate, Permission::LogsExport]
            }
        );
        assert_eq!(
            Command::parse(&["defaults", "operator"]).unwrap(),
            Command::Defaults {
                role: Role::Operator
            }
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            Command::parse(&["defaults", "root"]),
            Err(AuthzError::InvalidEnum(_))
        ));
        assert!(matches!(
            Command::parse(&["check", "bots.fly"]),
            Err(AuthzError::InvalidEnum(_))
        ));
        assert!(matches!(
            Command::parse(&["check"]),
            Err(AuthzError::Validation(_))
        ));
        assert!(matches!(
            Command::parse(&["launch"]),
            Err(AuthzError::Validation(_))
        ));
    }

    #[test]
    fn test_whoami_reports_admin() {
        let (mut directory, mut ctx) = session();
        let out = Command::WhoAmI.execute(&mut directory, &mut ctx).unwrap();
        assert_eq!(out["is_admin"], true);
        assert_eq!(out["current_user"]["user"]["role"], "admin");
        assert_eq!(out["current_user"]["initials"], "CS");
        assert_eq!(out["current_user"]["status_label"], "Ativo");
    }

    #[test]
    fn test_switch_swaps_user_and_records_access() {
        let (mut directory, mut ctx) = session();
        let out = Command::Switch {
            email: Some("joao.ferreira@empresa.com".into()),
        }
        .execute(&mut directory, &mut ctx)
        .unwrap();

        assert_eq!(out["is_admin"], false);
        assert!(!ctx.has_permission(Permission::BotsCreate));
        assert!(directory.get(Uuid::from_u128(5)).unwrap().last_access.is_some());

        let err = Command::Switch {
            email: Some("ghost@empresa.com".into()),
        }
        .execute(&mut directory, &mut ctx)
        .unwrap_err();
        assert!(matches!(err, AuthzError::UnknownEmail(_)));
        assert_eq!(ctx.current_user().unwrap().name, "João Ferreira");
    }

    #[test]
    fn test_check_without_user() {
        let (mut directory, mut ctx) = session();
        Command::Switch { email: None }
            .execute(&mut directory, &mut ctx)
            .unwrap();

        let out = Command::Check {
            permissions: vec![Permission::BotsCreate],
        }
        .execute(&mut directory, &mut ctx)
        .unwrap();
        assert_eq!(out["user"], Value::Null);
        assert_eq!(out["permissions"]["bots.criar"], false);
        assert_eq!(out["any"], false);
        assert_eq!(out["all"], false);
    }

    #[test]
    fn test_matrix_lists_every_role() {
        let (mut directory, mut ctx) = session();
        let out = Command::Matrix.execute(&mut directory, &mut ctx).unwrap();
        let roles = out.as_array().unwrap();
        assert_eq!(roles.len(), Role::all().len());
        assert_eq!(roles[2]["role"], "operator");
        let bots = &roles[2]["by_category"]["bots"];
        assert_eq!(bots["label"], "Bots");
        assert_eq!(
            bots["granted"],
            json!([
                { "permission": "bots.visualizar", "label": "Visualizar bots" },
                { "permission": "bots.executar", "label": "Executar bots" },
            ])
        );
        assert_eq!(roles[2]["by_category"]["sistema"]["label"], "Sistema");
        assert_eq!(roles[2]["by_category"]["sistema"]["granted"], json!([]));
    }

    #[test]
    fn test_users_reports_customization() {
        let (mut directory, mut ctx) = session();
        let out = Command::Users {
            query: Some("ana.santos".into()),
        }
        .execute(&mut directory, &mut ctx)
        .unwrap();

        let users = out["users"].as_array().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["customized"], true);
        assert_eq!(users[0]["status_label"], "Ativo");
        assert_eq!(
            users[0]["diff"]["added"],
            json!(["bots.editar", "logs.exportar"])
        );
        assert_eq!(out["counts"]["total"], 6);
    }
}

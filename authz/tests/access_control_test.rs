//! Access control integration tests.
//!
//! Exercises role defaults, per-user overrides and the current-user
//! context together, the way the dashboard consumes them.
//!
//! Run with: `cargo test --test access_control_test`

use maestro_authz::permissions::{
    apply_role_change, is_customized, permission_diff, resolve_default_permissions,
    toggle_permission,
};
use maestro_authz::{
    AccessContext, AccessRequirement, AuthzError, Permission, PermissionSet, Role, User,
};

// ============================================================================
// Helpers
// ============================================================================

fn create_user(role: Role) -> User {
    let test_id = uuid::Uuid::now_v7().simple().to_string();
    User::new(
        format!("Test {role}"),
        format!("{role}_{test_id}@empresa.com"),
        "Tester",
        role,
    )
}

// ============================================================================
// Role Defaults
// ============================================================================

#[test]
fn test_every_role_resolves_to_a_stable_non_empty_set() {
    for role in Role::all() {
        let first = resolve_default_permissions(*role);
        assert!(!first.is_empty(), "{role} has no defaults");
        assert_eq!(first, resolve_default_permissions(*role));
    }
}

#[test]
fn test_role_change_without_preserve_is_never_customized() {
    let mut user = create_user(Role::Viewer);
    for perm in [Permission::BotsDelete, Permission::SystemSettings] {
        user = toggle_permission(&user, perm);
    }
    assert!(is_customized(&user));

    for role in Role::all() {
        let changed = apply_role_change(&user, *role, false);
        assert!(!is_customized(&changed), "changing to {role}");
        assert_eq!(changed.permissions(), resolve_default_permissions(*role));
    }
}

// ============================================================================
// Editing Scenarios
// ============================================================================

#[test]
fn test_operator_gains_and_loses_bot_editing() {
    let operator = create_user(Role::Operator);
    let expected: PermissionSet = [
        Permission::BotsExecute,
        Permission::BotsView,
        Permission::AgendaView,
        Permission::LogsView,
    ]
    .iter()
    .collect();
    assert_eq!(operator.permissions(), expected);
    assert!(!is_customized(&operator));

    let edited = toggle_permission(&operator, Permission::BotsEdit);
    assert!(is_customized(&edited));
    let diff = permission_diff(&edited);
    assert_eq!(diff.added, vec![Permission::BotsEdit]);
    assert!(diff.removed.is_empty());

    let reverted = toggle_permission(&edited, Permission::BotsEdit);
    assert!(!is_customized(&reverted));
    assert_eq!(reverted.permissions(), expected);
}

#[test]
fn test_double_toggle_is_identity_for_every_role_and_permission() {
    for role in Role::all() {
        let user = create_user(*role);
        for perm in Permission::all() {
            let back = toggle_permission(&toggle_permission(&user, *perm), *perm);
            assert_eq!(back.permissions(), user.permissions());
            assert_eq!(is_customized(&back), is_customized(&user));
        }
    }
}

// ============================================================================
// Current User
// ============================================================================

#[test]
fn test_cleared_session_denies_bot_creation() {
    let mut ctx = AccessContext::new(Some(create_user(Role::Admin)));
    ctx.set_current_user(None);
    assert!(!ctx.has_permission(Permission::BotsCreate));
}

#[test]
fn test_empty_requirement_lists() {
    let ctx = AccessContext::new(Some(create_user(Role::Viewer)));
    assert!(!ctx.has_any_permission(&[]));
    assert!(ctx.has_all_permissions(&[]));

    // No user dominates the empty-list rule
    let anonymous = AccessContext::new(None);
    assert!(!anonymous.has_any_permission(&[]));
    assert!(!anonymous.has_all_permissions(&[]));
}

#[test]
fn test_non_admin_with_every_permission_is_not_admin() {
    let loaded = create_user(Role::Operator).with_permissions(PermissionSet::all());
    let ctx = AccessContext::new(Some(loaded));
    assert!(ctx.has_all_permissions(Permission::all()));
    assert!(!ctx.is_admin());
}

#[test]
fn test_switching_from_viewer_to_admin_does_not_merge() {
    let viewer = toggle_permission(&create_user(Role::Viewer), Permission::LogsConfigure);
    let admin = create_user(Role::Admin).with_permissions(PermissionSet::SYSTEM_USERS);

    let mut ctx = AccessContext::new(Some(viewer.clone()));
    assert!(ctx.has_permission(Permission::LogsConfigure));
    assert!(!ctx.is_admin());

    ctx.set_current_user(Some(admin.clone()));
    assert!(ctx.is_admin());
    assert_eq!(ctx.current_user(), Some(&admin));
    for perm in viewer.permissions().permissions() {
        assert!(!ctx.has_permission(perm), "{perm} leaked from previous user");
    }
    assert!(ctx.has_permission(Permission::SystemUsers));
}

#[test]
fn test_require_distinguishes_missing_user_from_missing_permission() {
    let requirement = AccessRequirement::AllOf(vec![Permission::BotsView, Permission::BotsDelete]);

    let anonymous = AccessContext::default();
    assert!(matches!(
        anonymous.require(&requirement),
        Err(AuthzError::NoCurrentUser)
    ));

    let manager = AccessContext::new(Some(create_user(Role::Manager)));
    assert!(matches!(
        manager.require(&requirement),
        Err(AuthzError::Forbidden(_))
    ));

    let admin = AccessContext::new(Some(create_user(Role::Admin)));
    assert!(admin.require(&requirement).is_ok());
}

use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_from_claim_maps_known_roles() {
    assert_eq!(Role::from_claim("admin"), Role::Admin);
    assert_eq!(Role::from_claim("user"), Role::User);
}

#[test]
fn role_from_claim_is_exact_match() {
    assert_eq!(Role::from_claim("Admin"), Role::None);
    assert_eq!(Role::from_claim(" admin"), Role::None);
    assert_eq!(Role::from_claim("superuser"), Role::None);
    assert_eq!(Role::from_claim(""), Role::None);
}

#[test]
fn role_default_is_none() {
    assert_eq!(Role::default(), Role::None);
}

#[test]
fn role_as_str_matches_claim_names() {
    assert_eq!(Role::from_claim(Role::Admin.as_str()), Role::Admin);
    assert_eq!(Role::from_claim(Role::User.as_str()), Role::User);
    assert_eq!(Role::None.as_str(), "none");
}

// =============================================================
// SessionState constructors
// =============================================================

#[test]
fn session_state_default_is_loading() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated);
    assert_eq!(state.role, Role::None);
}

#[test]
fn anonymous_state_is_settled_without_role() {
    let state = SessionState::anonymous();
    assert!(!state.loading);
    assert!(!state.is_authenticated);
    assert_eq!(state.role, Role::None);
}

#[test]
fn authenticated_state_carries_role() {
    let state = SessionState::authenticated(Role::User);
    assert!(!state.loading);
    assert!(state.is_authenticated);
    assert_eq!(state.role, Role::User);
}

// =============================================================
// settle
// =============================================================

#[test]
fn settle_replaces_loading_state() {
    let mut state = SessionState::initial();
    assert!(state.settle(SessionState::authenticated(Role::Admin)));
    assert_eq!(state, SessionState::authenticated(Role::Admin));
}

#[test]
fn settle_only_applies_once() {
    let mut state = SessionState::initial();
    assert!(state.settle(SessionState::anonymous()));
    assert!(!state.settle(SessionState::authenticated(Role::Admin)));
    assert_eq!(state, SessionState::anonymous());
}

#[test]
fn settle_never_returns_to_loading() {
    let mut state = SessionState::initial();
    state.settle(SessionState::initial());
    assert!(!state.loading);
    assert!(!state.settle(SessionState::initial()));
    assert!(!state.loading);
}

#[test]
fn settle_strips_role_from_unauthenticated_result() {
    let mut state = SessionState::initial();
    state.settle(SessionState { loading: false, is_authenticated: false, role: Role::Admin });
    assert_eq!(state.role, Role::None);
}

// =============================================================
// has_role
// =============================================================

#[test]
fn has_role_requires_settled_authenticated_match() {
    assert!(SessionState::authenticated(Role::Admin).has_role(Role::Admin));
    assert!(!SessionState::authenticated(Role::User).has_role(Role::Admin));
    assert!(!SessionState::anonymous().has_role(Role::None));
    assert!(!SessionState { loading: true, is_authenticated: true, role: Role::Admin }.has_role(Role::Admin));
}

#[test]
fn admin_does_not_satisfy_user_requirement() {
    assert!(!SessionState::authenticated(Role::Admin).has_role(Role::User));
}

use super::*;

#[test]
fn admin_link_hidden_while_loading() {
    assert!(!show_admin_link(&SessionState::initial()));
}

#[test]
fn admin_link_hidden_for_guests_and_users() {
    assert!(!show_admin_link(&SessionState::anonymous()));
    assert!(!show_admin_link(&SessionState::authenticated(Role::User)));
    assert!(!show_admin_link(&SessionState::authenticated(Role::None)));
}

#[test]
fn admin_link_shown_for_admins() {
    assert!(show_admin_link(&SessionState::authenticated(Role::Admin)));
}

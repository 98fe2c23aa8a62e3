use super::*;

#[test]
fn badge_label_while_loading() {
    assert_eq!(session_badge_label(&SessionState::initial()), "Checking session");
}

#[test]
fn badge_label_for_guest() {
    assert_eq!(session_badge_label(&SessionState::anonymous()), "Guest");
}

#[test]
fn badge_label_for_roles() {
    assert_eq!(session_badge_label(&SessionState::authenticated(Role::Admin)), "Admin");
    assert_eq!(session_badge_label(&SessionState::authenticated(Role::User)), "User");
    assert_eq!(session_badge_label(&SessionState::authenticated(Role::None)), "Signed in");
}

#[test]
fn badge_class_tracks_resolution() {
    assert_eq!(session_badge_class(&SessionState::initial()), "session-badge session-badge--pending");
    assert_eq!(session_badge_class(&SessionState::anonymous()), "session-badge session-badge--guest");
    assert_eq!(
        session_badge_class(&SessionState::authenticated(Role::User)),
        "session-badge session-badge--member"
    );
}

use super::*;

#[test]
fn default_config_uses_session_key_and_forbidden_route() {
    let config = SessionConfig::default();
    assert_eq!(config.storage_key, "session");
    assert_eq!(config.forbidden_path, "/403");
    assert_eq!(config.unrecognized_role, UnrecognizedRolePolicy::KeepAuthenticated);
}

#[test]
fn builders_override_single_fields() {
    let config = SessionConfig::default()
        .with_storage_key("dash_session")
        .with_forbidden_path("/denied")
        .with_unrecognized_role(UnrecognizedRolePolicy::TreatAsAnonymous);
    assert_eq!(config.storage_key, "dash_session");
    assert_eq!(config.forbidden_path, "/denied");
    assert_eq!(config.unrecognized_role, UnrecognizedRolePolicy::TreatAsAnonymous);
}

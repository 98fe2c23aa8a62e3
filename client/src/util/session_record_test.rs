use super::*;

// =============================================================
// decode_record: accepted shapes
// =============================================================

#[test]
fn decodes_admin_record() {
    let record = decode_record(r#"{"role":"admin"}"#).expect("decode");
    assert_eq!(record.role.as_deref(), Some("admin"));
    assert_eq!(record.role_claim(), RoleClaim::Known(Role::Admin));
}

#[test]
fn decodes_user_record_with_extra_fields() {
    let record = decode_record(r#"{"role":"user","name":"Ada","token":"abc"}"#).expect("decode");
    assert_eq!(record.role_claim(), RoleClaim::Known(Role::User));
}

#[test]
fn object_without_role_decodes_as_missing_claim() {
    let record = decode_record("{}").expect("decode");
    assert_eq!(record.role_claim(), RoleClaim::Missing);
}

#[test]
fn null_role_decodes_as_missing_claim() {
    let record = decode_record(r#"{"role":null}"#).expect("decode");
    assert_eq!(record.role_claim(), RoleClaim::Missing);
}

#[test]
fn unknown_role_string_is_unrecognized_claim() {
    let record = decode_record(r#"{"role":"superuser"}"#).expect("decode");
    assert_eq!(record.role_claim(), RoleClaim::Unrecognized("superuser".to_owned()));
}

// =============================================================
// decode_record: rejected shapes
// =============================================================

#[test]
fn plain_text_is_syntax_error() {
    let err = decode_record("not json").expect_err("should fail");
    assert!(matches!(err, RecordError::Syntax(_)));
}

#[test]
fn empty_string_is_syntax_error() {
    let err = decode_record("").expect_err("should fail");
    assert!(matches!(err, RecordError::Syntax(_)));
}

#[test]
fn truncated_object_is_syntax_error() {
    let err = decode_record(r#"{"role":"adm"#).expect_err("should fail");
    assert!(matches!(err, RecordError::Syntax(_)));
}

#[test]
fn non_object_json_is_rejected() {
    for raw in ["null", "42", r#""admin""#, r#"["admin"]"#, "true"] {
        let err = decode_record(raw).expect_err("should fail");
        assert!(matches!(err, RecordError::NotAnObject), "{raw}: {err}");
    }
}

#[test]
fn non_string_role_is_schema_error() {
    let err = decode_record(r#"{"role":1}"#).expect_err("should fail");
    assert!(matches!(err, RecordError::Schema(_)));
}

#[test]
fn record_error_messages_name_the_failure() {
    assert_eq!(RecordError::NotAnObject.to_string(), "session record is not a JSON object");
    let err = decode_record("nope").expect_err("should fail");
    assert!(err.to_string().starts_with("session record is not valid JSON"));
}

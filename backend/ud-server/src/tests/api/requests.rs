use crate::{LoginRequest, RegisterRequest, UpdateUserRequest};

#[test]
fn test_register_request_accepts_correo_alias() {
    let request: RegisterRequest = serde_json::from_str(
        r#"{"username": "ana", "password": "pw", "correo": "ana@example.com"}"#,
    )
    .unwrap();

    assert_eq!(request.email.as_deref(), Some("ana@example.com"));
}

#[test]
fn test_register_request_missing_fields_deserialize_as_none() {
    let request: RegisterRequest = serde_json::from_str("{}").unwrap();

    assert!(request.username.is_none());
    assert!(request.password.is_none());
    assert!(request.email.is_none());
}

#[test]
fn test_request_debug_redacts_password() {
    let register = RegisterRequest {
        username: Some("bob".into()),
        password: Some("secret123".into()),
        email: None,
    };
    let login = LoginRequest {
        username: Some("bob".into()),
        password: Some("secret123".into()),
    };

    assert!(!format!("{:?}", register).contains("secret123"));
    assert!(!format!("{:?}", login).contains("secret123"));
}

#[test]
fn test_update_request_distinguishes_absent_and_null_email() {
    let absent: UpdateUserRequest = serde_json::from_str(r#"{"is_active": false}"#).unwrap();
    let null: UpdateUserRequest = serde_json::from_str(r#"{"email": null}"#).unwrap();
    let set: UpdateUserRequest = serde_json::from_str(r#"{"email": "x@example.com"}"#).unwrap();

    assert_eq!(absent.email, None);
    assert_eq!(null.email, Some(None));
    assert_eq!(set.email, Some(Some("x@example.com".to_string())));
}

#[test]
fn test_update_request_empty_body_is_empty() {
    let request: UpdateUserRequest = serde_json::from_str("{}").unwrap();

    assert!(request.is_empty());
}

#[test]
fn test_update_request_accepts_legacy_aliases() {
    let request: UpdateUserRequest =
        serde_json::from_str(r#"{"correo": "ana@example.com", "esActivo": false}"#).unwrap();

    assert_eq!(request.email, Some(Some("ana@example.com".to_string())));
    assert_eq!(request.is_active, Some(false));
}

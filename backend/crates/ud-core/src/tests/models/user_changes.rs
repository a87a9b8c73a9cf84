use crate::UserChanges;

#[test]
fn test_default_changes_are_empty() {
    assert!(UserChanges::default().is_empty());
}

#[test]
fn test_clearing_email_is_a_change() {
    let changes = UserChanges {
        email: Some(None),
        ..Default::default()
    };

    assert!(!changes.is_empty());
}

#[test]
fn test_is_active_only_is_a_change() {
    let changes = UserChanges {
        is_active: Some(false),
        ..Default::default()
    };

    assert!(!changes.is_empty());
}

#[test]
fn test_debug_redacts_new_digest() {
    let changes = UserChanges {
        credential_digest: Some("top-secret-digest".to_string()),
        ..Default::default()
    };
    let rendered = format!("{:?}", changes);

    assert!(!rendered.contains("top-secret-digest"));
    assert!(rendered.contains("<redacted>"));
}

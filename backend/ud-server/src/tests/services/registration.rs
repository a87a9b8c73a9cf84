use crate::tests::{FailingStore, fast_hasher, memory_store};
use crate::{ApiError, RegisterRequest, RegistrationService};

use std::sync::Arc;

fn request(username: Option<&str>, password: Option<&str>) -> RegisterRequest {
    RegisterRequest {
        username: username.map(str::to_string),
        password: password.map(str::to_string),
        email: None,
    }
}

#[tokio::test]
async fn given_valid_input_when_register_then_digest_stored_instead_of_password() {
    // Given
    let store = memory_store().await;
    let hasher = fast_hasher();
    let service = RegistrationService::new(store.clone(), hasher.clone());

    // When
    let user = service
        .register(RegisterRequest {
            username: Some("alice".into()),
            password: Some("secret123".into()),
            email: Some("alice@example.com".into()),
        })
        .await
        .unwrap();

    // Then
    let stored = store.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(stored.username, "alice");
    assert_eq!(stored.email.as_deref(), Some("alice@example.com"));
    assert!(stored.is_active);
    assert_ne!(stored.credential_digest, "secret123");
    assert!(hasher.verify("secret123", &stored.credential_digest).unwrap());
}

#[tokio::test]
async fn given_missing_username_when_register_then_validation_error_and_nothing_stored() {
    // Given
    let store = memory_store().await;
    let service = RegistrationService::new(store.clone(), fast_hasher());

    // When
    let result = service.register(request(None, Some("secret123"))).await;

    // Then
    assert!(matches!(result, Err(ApiError::Validation { .. })));
    assert!(store.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_whitespace_password_when_register_then_validation_error() {
    // Given
    let service = RegistrationService::new(memory_store().await, fast_hasher());

    // When
    let result = service.register(request(Some("alice"), Some("   "))).await;

    // Then
    assert!(matches!(
        result,
        Err(ApiError::Validation { field: Some(ref f), .. }) if f == "password"
    ));
}

#[tokio::test]
async fn given_missing_fields_when_register_then_store_never_called() {
    // Given: any store call would fail with a storage error
    let service = RegistrationService::new(Arc::new(FailingStore), fast_hasher());

    // When
    let result = service.register(request(Some(""), None)).await;

    // Then
    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

#[tokio::test]
async fn given_taken_username_when_register_then_duplicate_and_original_unchanged() {
    // Given
    let store = memory_store().await;
    let hasher = fast_hasher();
    let service = RegistrationService::new(store.clone(), hasher.clone());
    let original = service
        .register(request(Some("alice"), Some("first-password")))
        .await
        .unwrap();

    // When
    let result = service
        .register(request(Some("alice"), Some("second-password")))
        .await;

    // Then
    assert!(matches!(result, Err(ApiError::DuplicateUsername { .. })));
    let stored = store.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(stored, original);
    assert!(hasher.verify("first-password", &stored.credential_digest).unwrap());
    assert_eq!(store.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn given_blank_email_when_register_then_stored_without_email() {
    // Given
    let store = memory_store().await;
    let service = RegistrationService::new(store.clone(), fast_hasher());

    // When
    let user = service
        .register(RegisterRequest {
            username: Some("carol".into()),
            password: Some("pw".into()),
            email: Some("  ".into()),
        })
        .await
        .unwrap();

    // Then
    assert_eq!(user.email, None);
}

#[tokio::test]
async fn given_failing_store_when_register_then_storage_error() {
    // Given
    let service = RegistrationService::new(Arc::new(FailingStore), fast_hasher());

    // When
    let result = service.register(request(Some("dave"), Some("pw"))).await;

    // Then
    assert!(matches!(result, Err(ApiError::Storage { .. })));
}

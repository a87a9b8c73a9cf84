use crate::tests::{FailingStore, fast_hasher, memory_store, test_codec};
use crate::{ApiError, LoginRequest, LoginService};

use ud_core::{NewUser, UserChanges};
use ud_db::UserStore;

use std::sync::Arc;

fn credentials(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: Some(username.to_string()),
        password: Some(password.to_string()),
    }
}

async fn store_with_bob() -> (Arc<dyn UserStore>, i64) {
    let store = memory_store().await;
    let digest = fast_hasher().hash("secret123").unwrap();
    let user = store
        .insert(&NewUser::new(
            "bob".into(),
            digest,
            Some("bob@example.com".into()),
        ))
        .await
        .unwrap();
    (store, user.id)
}

#[tokio::test]
async fn given_correct_password_when_login_then_token_carries_record_claims() {
    // Given
    let (store, bob_id) = store_with_bob().await;
    let codec = test_codec();
    let service = LoginService::new(store, fast_hasher(), codec.clone())
        .await
        .unwrap();

    // When
    let token = service.login(credentials("bob", "secret123")).await.unwrap();

    // Then
    let claims = codec.verify(&token).unwrap();
    assert_eq!(claims.id, bob_id);
    assert_eq!(claims.sub, bob_id.to_string());
    assert_eq!(claims.username, "bob");
    assert_eq!(claims.email.as_deref(), Some("bob@example.com"));
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[tokio::test]
async fn given_wrong_password_when_login_then_invalid_credentials() {
    // Given
    let (store, _) = store_with_bob().await;
    let service = LoginService::new(store, fast_hasher(), test_codec())
        .await
        .unwrap();

    // When
    let result = service.login(credentials("bob", "wrong")).await;

    // Then
    assert!(matches!(result, Err(ApiError::InvalidCredentials { .. })));
}

#[tokio::test]
async fn given_unknown_username_when_login_then_same_outcome_as_wrong_password() {
    // Given
    let (store, _) = store_with_bob().await;
    let service = LoginService::new(store, fast_hasher(), test_codec())
        .await
        .unwrap();

    // When
    let unknown = service.login(credentials("nobody", "secret123")).await;
    let wrong = service.login(credentials("bob", "nope")).await;

    // Then
    let unknown = unknown.unwrap_err();
    let wrong = wrong.unwrap_err();
    assert!(matches!(unknown, ApiError::InvalidCredentials { .. }));
    assert!(matches!(wrong, ApiError::InvalidCredentials { .. }));
    assert_eq!(unknown.status(), wrong.status());
}

#[tokio::test]
async fn given_missing_password_when_login_then_validation_error() {
    // Given: validation must happen before the store is touched
    let service = LoginService::new(Arc::new(FailingStore), fast_hasher(), test_codec())
        .await
        .unwrap();

    // When
    let result = service
        .login(LoginRequest {
            username: Some("bob".into()),
            password: None,
        })
        .await;

    // Then
    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

#[tokio::test]
async fn given_inactive_user_when_login_then_token_still_issued() {
    // Given
    let (store, bob_id) = store_with_bob().await;
    store
        .update(
            bob_id,
            &UserChanges {
                is_active: Some(false),
                ..UserChanges::default()
            },
        )
        .await
        .unwrap();
    let service = LoginService::new(store, fast_hasher(), test_codec())
        .await
        .unwrap();

    // When
    let result = service.login(credentials("bob", "secret123")).await;

    // Then
    assert!(result.is_ok());
}

#[tokio::test]
async fn given_failing_store_when_login_then_storage_error() {
    // Given
    let service = LoginService::new(Arc::new(FailingStore), fast_hasher(), test_codec())
        .await
        .unwrap();

    // When
    let result = service.login(credentials("bob", "secret123")).await;

    // Then
    assert!(matches!(result, Err(ApiError::Storage { .. })));
}

//! User creation flow against a real (in-memory SQLite) database.

mod support;

use common::AppError;
use domain::{CreateUserParams, NewUser};
use hotel_service_lib::service::{UserManager, UserService};

fn params(email: &str) -> CreateUserParams {
    CreateUserParams::new("James", "Foo", email, "supersecurepassword")
}

#[tokio::test]
async fn test_created_user_stores_only_the_credential() {
    let stores = support::stores().await;
    let service = UserManager::new(stores.users.clone());

    let user = service.create_user(params("james@foo.com")).await.unwrap();

    let stored = stores
        .users
        .find_by_email("james@foo.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.id, user.id);
    assert_ne!(stored.encrypted_password.as_str(), "supersecurepassword");
    assert!(stored.encrypted_password.verify("supersecurepassword"));
    assert!(!stored.encrypted_password.verify("wrongpassword"));

    let fetched = service.get_user(user.id).await.unwrap();
    assert_eq!(fetched, stored);
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let stores = support::stores().await;
    let service = UserManager::new(stores.users.clone());

    service.create_user(params("ann@lee.io")).await.unwrap();
    let result = service.create_user(params("ann@lee.io")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_store_reports_taken_email_as_conflict() {
    let stores = support::stores().await;

    // Skips the service lookup, as a concurrent create would
    let first = NewUser::from_params(params("ann@lee.io")).unwrap();
    let second = NewUser::from_params(params("ann@lee.io")).unwrap();
    stores.users.create(first).await.unwrap();
    let result = stores.users.create(second).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(stores.users.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_concurrent_creates_with_same_email_conflict() {
    let stores = support::stores().await;
    let service = std::sync::Arc::new(UserManager::new(stores.users.clone()));

    let first = tokio::spawn({
        let service = service.clone();
        async move { service.create_user(params("race@lee.io")).await }
    });
    let second = tokio::spawn({
        let service = service.clone();
        async move { service.create_user(params("race@lee.io")).await }
    });

    let results = [first.await.unwrap(), second.await.unwrap()];
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .any(|r| matches!(r, Err(AppError::Conflict(_)))));
    assert_eq!(stores.users.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_invalid_input_persists_nothing() {
    let stores = support::stores().await;
    let service = UserManager::new(stores.users.clone());

    let result = service.create_user(params("a@b.c")).await;

    let err = result.unwrap_err();
    assert!(err.validation_errors().unwrap().contains("email"));
    assert!(stores.users.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_drop_all_removes_users() {
    let stores = support::stores().await;
    let service = UserManager::new(stores.users.clone());
    service.create_user(params("james@foo.com")).await.unwrap();

    stores.users.drop_all().await.unwrap();

    assert!(stores.users.list().await.unwrap().is_empty());
}

use axum::http::HeaderMap;
use test_utils::{builder::TestBuilder, factory};

use super::{headers_for, test_tokens};
use crate::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
};

/// Tests that a valid bearer token resolves to the user row it references.
///
/// Expected: Ok with the authenticated user
#[tokio::test]
async fn accepts_valid_token() {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = test_tokens();

    let user = factory::create_user(db).await.unwrap();
    let headers = headers_for(&tokens, &user);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert_eq!(result.unwrap().id, user.id);
}

/// Tests that a request without an Authorization header is rejected.
///
/// Expected: Err(MissingToken)
#[tokio::test]
async fn rejects_missing_token() {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = test_tokens();

    let result = AuthGuard::new(db, &tokens, &HeaderMap::new())
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests that a token signed with a different key is rejected.
///
/// Expected: Err(InvalidToken)
#[tokio::test]
async fn rejects_token_with_wrong_signature() {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = test_tokens();
    let foreign_tokens = crate::service::token::TokenService::new("another-key", 3600);

    let user = factory::create_user(db).await.unwrap();
    let headers = headers_for(&foreign_tokens, &user);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}

/// Tests that a valid token referencing a deleted account is rejected.
///
/// Expected: Err(UserNotInDatabase)
#[tokio::test]
async fn rejects_token_for_deleted_user() {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = test_tokens();

    // Issue a token for a user row that was never inserted.
    let ghost = entity::user::Model {
        id: 4242,
        email: "ghost@example.com".to_string(),
        name: "Ghost".to_string(),
        password_hash: "irrelevant".to_string(),
        admin: false,
        created_at: chrono::Utc::now(),
    };
    let headers = headers_for(&tokens, &ghost);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));
}

/// Tests that a non-admin user is denied admin-gated operations.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn rejects_non_admin_for_admin_permission() {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = test_tokens();

    let user = factory::create_user(db).await.unwrap();
    let headers = headers_for(&tokens, &user);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
}

/// Tests that an admin user passes the admin permission check.
///
/// Expected: Ok with the authenticated admin
#[tokio::test]
async fn accepts_admin_for_admin_permission() {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = test_tokens();

    let admin = factory::user::create_admin(db).await.unwrap();
    let headers = headers_for(&tokens, &admin);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(result.unwrap().admin);
}

/// Tests that the admin check reads the database row, not the token claim.
///
/// A token minted while the user was admin must stop granting admin access
/// once the row's flag is cleared.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn admin_check_follows_database_not_claims() {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = test_tokens();

    let admin = factory::user::create_admin(db).await.unwrap();
    let headers = headers_for(&tokens, &admin);

    // Revoke admin after the token was minted.
    let mut active: entity::user::ActiveModel = admin.into();
    active.admin = ActiveValue::Set(false);
    active.update(db).await.unwrap();

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
}

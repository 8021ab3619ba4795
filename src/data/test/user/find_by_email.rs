use super::*;
use test_utils::factory;

/// Tests finding a user by their email address.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("driver@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("driver@example.com").await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests looking up an email with no matching account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("nobody@example.com").await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that the lookup is exact, not case-normalizing.
///
/// Emails are normalized to lowercase before they reach the repository, so a
/// lookup with different casing must not match.
///
/// Expected: Ok(None)
#[tokio::test]
async fn lookup_is_case_sensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("driver@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("DRIVER@example.com").await?;

    assert!(found.is_none());

    Ok(())
}

use super::*;

/// Tests creating a new user record.
///
/// Verifies that the repository stores the given email, name, hash, and admin
/// flag, and that the row receives a generated primary key.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            "driver@example.com".to_string(),
            "Test Driver".to_string(),
            "hash".to_string(),
            false,
        )
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "driver@example.com");
    assert_eq!(user.name, "Test Driver");
    assert!(!user.admin);

    // Verify user exists in database
    let db_user = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(db_user.is_some());

    Ok(())
}

/// Tests that the unique email constraint rejects duplicates.
///
/// Expected: Err on second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(
        "driver@example.com".to_string(),
        "First".to_string(),
        "hash".to_string(),
        false,
    )
    .await?;

    let result = repo
        .create(
            "driver@example.com".to_string(),
            "Second".to_string(),
            "hash".to_string(),
            false,
        )
        .await;

    assert!(result.is_err());

    Ok(())
}

use super::*;
use test_utils::factory;

/// Tests finding a user by primary key.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_id(user.id).await?;

    assert_eq!(found.map(|u| u.email), Some(user.email));

    Ok(())
}

/// Tests looking up an id with no matching account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}

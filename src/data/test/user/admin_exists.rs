use super::*;
use test_utils::factory;

/// Tests the admin check against an empty table.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_for_empty_database() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.admin_exists().await?);

    Ok(())
}

/// Tests the admin check when only regular users exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_when_only_regular_users_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(!repo.admin_exists().await?);

    Ok(())
}

/// Tests the admin check when an admin account exists.
///
/// Expected: Ok(true)
#[tokio::test]
async fn true_when_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::user::create_admin(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.admin_exists().await?);

    Ok(())
}

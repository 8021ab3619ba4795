use super::*;

/// Tests removing a connection record by its connection id string.
///
/// Expected: Ok(1) and only the targeted record is gone
#[tokio::test]
async fn deletes_matching_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::connection_id::create_connection_with_id(db, user.id, "conn-a").await?;
    factory::connection_id::create_connection_with_id(db, user.id, "conn-b").await?;

    let repo = ConnectionIdRepository::new(db);
    let deleted = repo.delete_by_connection_id("conn-a").await?;

    assert_eq!(deleted, 1);

    let remaining = repo.find_by_user(user.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].connection_id, "conn-b");

    Ok(())
}

/// Tests removing a connection id that was never stored.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deleting_unknown_connection_affects_no_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ConnectionIdRepository::new(db);
    let deleted = repo.delete_by_connection_id("conn-gone").await?;

    assert_eq!(deleted, 0);

    Ok(())
}

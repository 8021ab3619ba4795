use super::*;

/// Tests storing a connection record for a user.
///
/// Expected: Ok with the record persisted
#[tokio::test]
async fn creates_connection_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ConnectionIdRepository::new(db);
    let record = repo.create(user.id, "abc-123").await?;

    assert_eq!(record.connection_id, "abc-123");
    assert_eq!(record.user_id, user.id);

    let db_record = entity::prelude::ConnectionId::find_by_id(record.id)
        .one(db)
        .await?;
    assert!(db_record.is_some());

    Ok(())
}

/// Tests that connection ids are unique across users.
///
/// Expected: Err on second insert with the same connection id
#[tokio::test]
async fn rejects_duplicate_connection_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = ConnectionIdRepository::new(db);
    repo.create(user.id, "abc-123").await?;

    let result = repo.create(other.id, "abc-123").await;

    assert!(result.is_err());

    Ok(())
}

use super::*;

/// Tests purging every connection record.
///
/// Simulates the startup initializer clearing rows left behind by a previous
/// process.
///
/// Expected: Ok(3) and an empty table
#[tokio::test]
async fn purges_all_records() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_connection(db, user.id).await?;
    factory::create_connection(db, user.id).await?;
    factory::create_connection(db, other.id).await?;

    let repo = ConnectionIdRepository::new(db);
    let purged = repo.purge_all().await?;

    assert_eq!(purged, 3);

    let count = entity::prelude::ConnectionId::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests purging an already-empty table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn purging_empty_table_affects_no_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ConnectionIdRepository::new(db);
    let purged = repo.purge_all().await?;

    assert_eq!(purged, 0);

    Ok(())
}

use super::*;

/// Tests deleting an existing notification.
///
/// Expected: Ok(1) and the row is gone
#[tokio::test]
async fn deletes_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let notification = factory::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    let deleted = repo.delete(notification.id).await?;

    assert_eq!(deleted, 1);

    let db_notification = entity::prelude::Notification::find_by_id(notification.id)
        .one(db)
        .await?;
    assert!(db_notification.is_none());

    Ok(())
}

/// Tests deleting an id that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deleting_unknown_id_affects_no_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    let deleted = repo.delete(999).await?;

    assert_eq!(deleted, 0);

    Ok(())
}

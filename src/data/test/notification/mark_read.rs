use super::*;

/// Tests marking an unread notification as read.
///
/// Expected: Ok with is_read true, persisted
#[tokio::test]
async fn marks_notification_read() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let notification = factory::create_notification(db, user.id).await?;
    assert!(!notification.is_read);

    let repo = NotificationRepository::new(db);
    let updated = repo.mark_read(notification).await?;

    assert!(updated.is_read);

    // Verify the flag was persisted
    let db_notification = entity::prelude::Notification::find_by_id(updated.id)
        .one(db)
        .await?
        .unwrap();
    assert!(db_notification.is_read);

    Ok(())
}

/// Tests that marking an already-read notification is a no-op.
///
/// Expected: Ok with is_read still true
#[tokio::test]
async fn marking_read_twice_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let notification = factory::notification::create_read_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    let updated = repo.mark_read(notification).await?;

    assert!(updated.is_read);

    Ok(())
}

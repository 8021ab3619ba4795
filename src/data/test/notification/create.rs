use super::*;

/// Tests creating a notification for a user.
///
/// Verifies the row is stored unread with the given title and body.
///
/// Expected: Ok with notification created
#[tokio::test]
async fn creates_unread_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let notification = repo
        .create(CreateNotificationParams {
            user_id: user.id,
            title: "Service due".to_string(),
            body: "Vehicle 12 is due for inspection".to_string(),
        })
        .await?;

    assert!(notification.id > 0);
    assert_eq!(notification.user_id, user.id);
    assert_eq!(notification.title, "Service due");
    assert!(!notification.is_read);

    // Verify notification exists in database
    let db_notification = entity::prelude::Notification::find_by_id(notification.id)
        .one(db)
        .await?;
    assert!(db_notification.is_some());

    Ok(())
}

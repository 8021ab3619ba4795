use super::*;

/// Tests fetching the first page of a user's notifications.
///
/// Creates 12 notifications and fetches pages of 10. The first page holds 10
/// entries and the reported total counts all 12.
///
/// Expected: Ok with 10 notifications and total 12
#[tokio::test]
async fn returns_first_page_with_total() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for _ in 0..12 {
        factory::create_notification(db, user.id).await?;
    }

    let repo = NotificationRepository::new(db);
    let (notifications, total) = repo.get_by_user_paginated(user.id, 0, 10).await?;

    assert_eq!(notifications.len(), 10);
    assert_eq!(total, 12);

    Ok(())
}

/// Tests fetching the last, partially filled page.
///
/// Expected: Ok with the remaining 2 notifications
#[tokio::test]
async fn returns_partial_last_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for _ in 0..12 {
        factory::create_notification(db, user.id).await?;
    }

    let repo = NotificationRepository::new(db);
    let (notifications, total) = repo.get_by_user_paginated(user.id, 1, 10).await?;

    assert_eq!(notifications.len(), 2);
    assert_eq!(total, 12);

    Ok(())
}

/// Tests that only the requesting user's notifications are returned.
///
/// Expected: Ok containing only the first user's rows
#[tokio::test]
async fn excludes_other_users_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_notification(db, user.id).await?;
    factory::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);
    let (notifications, total) = repo.get_by_user_paginated(user.id, 0, 10).await?;

    assert_eq!(total, 1);
    assert!(notifications.iter().all(|n| n.user_id == user.id));

    Ok(())
}

/// Tests fetching a page for a user with no notifications.
///
/// Expected: Ok with an empty page and total 0
#[tokio::test]
async fn empty_for_user_without_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let (notifications, total) = repo.get_by_user_paginated(user.id, 0, 10).await?;

    assert!(notifications.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

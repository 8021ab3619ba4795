//! Notification factory for creating test notification entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an unread notification for the given user with default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Recipient user ID
///
/// # Returns
/// - `Ok(Model)` - The created notification entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    let id = next_id();
    entity::notification::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        title: ActiveValue::Set(format!("Notification {}", id)),
        body: ActiveValue::Set(format!("Notification body {}", id)),
        is_read: ActiveValue::Set(false),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a notification that has already been marked read.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Recipient user ID
///
/// # Returns
/// - `Ok(Model)` - The created notification entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_read_notification(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    let id = next_id();
    entity::notification::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        title: ActiveValue::Set(format!("Notification {}", id)),
        body: ActiveValue::Set(format!("Notification body {}", id)),
        is_read: ActiveValue::Set(true),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with an unread notification addressed to them.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, notification))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_notification(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::notification::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let notification = crate::factory::notification::create_notification(db, user.id).await?;

    Ok((user, notification))
}

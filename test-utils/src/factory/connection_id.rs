//! Factory for creating realtime connection records.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a connection record for the given user.
///
/// The connection id is a unique synthetic string rather than a real UUID so
/// tests can assert on predictable prefixes.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owning user ID
///
/// # Returns
/// - `Ok(Model)` - The created connection record
/// - `Err(DbErr)` - Database error during insert
pub async fn create_connection(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::connection_id::Model, DbErr> {
    create_connection_with_id(db, user_id, &format!("conn-{}", next_id())).await
}

/// Creates a connection record with an explicit connection id.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owning user ID
/// - `connection_id` - Connection identifier to store
///
/// # Returns
/// - `Ok(Model)` - The created connection record
/// - `Err(DbErr)` - Database error during insert
pub async fn create_connection_with_id(
    db: &DatabaseConnection,
    user_id: i32,
    connection_id: &str,
) -> Result<entity::connection_id::Model, DbErr> {
    entity::connection_id::ActiveModel {
        connection_id: ActiveValue::Set(connection_id.to_string()),
        user_id: ActiveValue::Set(user_id),
        connected_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

//! Realtime connection-id repository.
//!
//! Tracks which hub connections belong to which user so the notification
//! service can push to every live session of a recipient. This repository is
//! deliberately a thin CRUD wrapper; the hub owns all connection lifecycle
//! logic.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct ConnectionIdRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConnectionIdRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a connection record for a user.
    pub async fn create(
        &self,
        user_id: i32,
        connection_id: &str,
    ) -> Result<entity::connection_id::Model, DbErr> {
        entity::connection_id::ActiveModel {
            connection_id: ActiveValue::Set(connection_id.to_string()),
            user_id: ActiveValue::Set(user_id),
            connected_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all connection records for a user.
    pub async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::connection_id::Model>, DbErr> {
        entity::prelude::ConnectionId::find()
            .filter(entity::connection_id::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Removes a connection record by its connection id string.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when the connection was unknown)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_connection_id(&self, connection_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::ConnectionId::delete_many()
            .filter(entity::connection_id::Column::ConnectionId.eq(connection_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes every connection record.
    ///
    /// Run once at startup: any rows present before the process started belong
    /// to sockets that no longer exist.
    pub async fn purge_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::ConnectionId::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

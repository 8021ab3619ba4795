//! Notification data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::notification::CreateNotificationParams;

/// Repository providing database operations for notifications.
pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new unread notification.
    pub async fn create(
        &self,
        params: CreateNotificationParams,
    ) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            title: ActiveValue::Set(params.title),
            body: ActiveValue::Set(params.body),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a notification by primary key.
    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets one page of a user's notifications, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Recipient user ID
    /// - `page` - Zero-based page index
    /// - `entries` - Page size
    ///
    /// # Returns
    /// - `Ok((notifications, total))` - Page contents and the total row count for the user
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user_paginated(
        &self,
        user_id: i32,
        page: u64,
        entries: u64,
    ) -> Result<(Vec<entity::notification::Model>, u64), DbErr> {
        let paginator = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .paginate(self.db, entries);

        let total = paginator.num_items().await?;
        let notifications = paginator.fetch_page(page).await?;

        Ok((notifications, total))
    }

    /// Marks a notification as read.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated notification
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_read(
        &self,
        notification: entity::notification::Model,
    ) -> Result<entity::notification::Model, DbErr> {
        let mut active: entity::notification::ActiveModel = notification.into();
        active.is_read = ActiveValue::Set(true);

        active.update(self.db).await
    }

    /// Deletes a notification by primary key.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when the id did not exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

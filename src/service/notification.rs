//! Notification business logic.
//!
//! This module provides the `NotificationService` for creating, querying, and
//! managing notifications. Creation also fans the new notification out to
//! every live hub connection of the recipient; delivery failures never fail
//! the request, they only shrink the delivered count.

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        connection_id::ConnectionIdRepository, notification::NotificationRepository,
        user::UserRepository,
    },
    error::AppError,
    hub::NotificationHub,
    model::notification::{CreateNotificationParams, NotificationDto},
};

// Page size bounds; a zero page size would make the paginator divide by zero.
const MIN_PAGE_ENTRIES: u64 = 1;
const MAX_PAGE_ENTRIES: u64 = 100;

/// One page of a user's notifications with pagination metadata.
pub struct PaginatedNotifications {
    pub notifications: Vec<entity::notification::Model>,
    pub total: u64,
    pub page: u64,
    pub entries: u64,
    pub total_pages: u64,
}

/// Service providing business logic for notifications.
pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
    hub: &'a NotificationHub,
}

impl<'a> NotificationService<'a> {
    /// Creates a new NotificationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `hub` - Hub registry used to push created notifications
    ///
    /// # Returns
    /// - `NotificationService` - New service instance
    pub fn new(db: &'a DatabaseConnection, hub: &'a NotificationHub) -> Self {
        Self { db, hub }
    }

    /// Creates a notification and pushes it to the recipient's live connections.
    ///
    /// The notification is persisted first; the push is best-effort and a
    /// recipient with no live connections simply receives nothing until they
    /// next query their notification list.
    ///
    /// # Arguments
    /// - `params` - Validated creation inputs
    ///
    /// # Returns
    /// - `Ok(Model)` - The persisted notification
    /// - `Err(AppError::NotFound)` - The recipient user does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        params: CreateNotificationParams,
    ) -> Result<entity::notification::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(params.user_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "User {} not found",
                params.user_id
            )));
        }

        let notification = NotificationRepository::new(self.db).create(params).await?;

        let payload = serde_json::to_string(&NotificationDto::from_entity(notification.clone()))?;

        let connections = ConnectionIdRepository::new(self.db)
            .find_by_user(notification.user_id)
            .await?;
        let connection_ids: Vec<String> =
            connections.into_iter().map(|c| c.connection_id).collect();

        let delivered = self.hub.send_to(&connection_ids, &payload).await;

        tracing::debug!(
            "Notification {} pushed to {}/{} connections of user {}",
            notification.id,
            delivered,
            connection_ids.len(),
            notification.user_id
        );

        Ok(notification)
    }

    /// Gets one page of a user's notifications, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Recipient user ID
    /// - `page` - Zero-based page index
    /// - `entries` - Page size, clamped to 1..=100
    ///
    /// # Returns
    /// - `Ok(PaginatedNotifications)` - Page contents with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list(
        &self,
        user_id: i32,
        page: u64,
        entries: u64,
    ) -> Result<PaginatedNotifications, AppError> {
        let entries = entries.clamp(MIN_PAGE_ENTRIES, MAX_PAGE_ENTRIES);

        let (notifications, total) = NotificationRepository::new(self.db)
            .get_by_user_paginated(user_id, page, entries)
            .await?;

        let total_pages = total.div_ceil(entries);

        Ok(PaginatedNotifications {
            notifications,
            total,
            page,
            entries,
            total_pages,
        })
    }

    /// Marks one of the user's notifications as read.
    ///
    /// Notifications belonging to other users are reported as not found so
    /// the endpoint does not reveal other users' notification ids.
    ///
    /// # Arguments
    /// - `user_id` - The calling user's ID
    /// - `notification_id` - Notification to mark read
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated notification
    /// - `Err(AppError::NotFound)` - Unknown id or owned by another user
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn mark_read(
        &self,
        user_id: i32,
        notification_id: i32,
    ) -> Result<entity::notification::Model, AppError> {
        let repo = NotificationRepository::new(self.db);

        let notification = self.find_owned(&repo, user_id, notification_id).await?;

        Ok(repo.mark_read(notification).await?)
    }

    /// Deletes one of the user's notifications.
    ///
    /// # Arguments
    /// - `user_id` - The calling user's ID
    /// - `notification_id` - Notification to delete
    ///
    /// # Returns
    /// - `Ok(())` - The notification was deleted
    /// - `Err(AppError::NotFound)` - Unknown id or owned by another user
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, user_id: i32, notification_id: i32) -> Result<(), AppError> {
        let repo = NotificationRepository::new(self.db);

        let notification = self.find_owned(&repo, user_id, notification_id).await?;

        repo.delete(notification.id).await?;

        Ok(())
    }

    async fn find_owned(
        &self,
        repo: &NotificationRepository<'a>,
        user_id: i32,
        notification_id: i32,
    ) -> Result<entity::notification::Model, AppError> {
        let Some(notification) = repo.find_by_id(notification_id).await? else {
            return Err(AppError::NotFound("Notification not found".to_string()));
        };

        if notification.user_id != user_id {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }

        Ok(notification)
    }
}

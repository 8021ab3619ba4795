use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub body: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl NotificationDto {
    pub fn from_entity(notification: entity::notification::Model) -> Self {
        Self {
            id: notification.id,
            user_id: notification.user_id,
            title: notification.title,
            body: notification.body,
            is_read: notification.is_read,
            created_at: notification.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateNotificationDto {
    pub user_id: i32,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedNotificationsDto {
    pub notifications: Vec<NotificationDto>,
    pub total: u64,
    pub page: u64,
    pub entries: u64,
    pub total_pages: u64,
}

/// Validated inputs for creating a notification.
pub struct CreateNotificationParams {
    pub user_id: i32,
    pub title: String,
    pub body: String,
}

impl CreateNotificationParams {
    pub fn from_dto(dto: CreateNotificationDto) -> Self {
        Self {
            user_id: dto.user_id,
            title: dto.title,
            body: dto.body,
        }
    }
}

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::ErrorDto,
        notification::{
            CreateNotificationDto, CreateNotificationParams, NotificationDto,
            PaginatedNotificationsDto,
        },
    },
    service::notification::NotificationService,
    state::AppState,
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notifications";

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// Get the current user's notifications.
///
/// Returns a paginated list of the authenticated user's notifications,
/// newest first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Paginated list of notifications
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    params(
        ("page" = u64, Query, description = "Zero-based page index"),
        ("entries" = u64, Query, description = "Page size, defaults to 10")
    ),
    responses(
        (status = 200, description = "Paginated list of notifications", body = PaginatedNotificationsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("Bearer" = [])),
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = NotificationService::new(&state.db, &state.hub);
    let page = service.list(user.id, params.page, params.entries).await?;

    Ok(Json(PaginatedNotificationsDto {
        notifications: page
            .notifications
            .into_iter()
            .map(NotificationDto::from_entity)
            .collect(),
        total: page.total,
        page: page.page,
        entries: page.entries,
        total_pages: page.total_pages,
    }))
}

/// Create a notification for a user.
///
/// Persists the notification and pushes it to every live hub connection of
/// the recipient. Only accessible by admins.
///
/// # Access Control
/// - `Admin` - Only admins can create notifications
///
/// # Arguments
/// - `state` - Application state containing the database connection and hub
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Notification creation data (recipient, title, body)
///
/// # Returns
/// - `201 Created` - Successfully created notification
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - Recipient user does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    request_body = CreateNotificationDto,
    responses(
        (status = 201, description = "Successfully created notification", body = NotificationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Recipient user does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("Bearer" = [])),
)]
pub async fn create_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = NotificationService::new(&state.db, &state.hub);

    let params = CreateNotificationParams::from_dto(payload);

    let notification = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(NotificationDto::from_entity(notification)),
    ))
}

/// Mark one of the current user's notifications as read.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Notification ID
///
/// # Returns
/// - `200 OK` - The updated notification
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Unknown notification or owned by another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "The updated notification", body = NotificationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("Bearer" = [])),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = NotificationService::new(&state.db, &state.hub);
    let notification = service.mark_read(user.id, id).await?;

    Ok(Json(NotificationDto::from_entity(notification)))
}

/// Delete one of the current user's notifications.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Notification ID
///
/// # Returns
/// - `204 No Content` - Notification deleted
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Unknown notification or owned by another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 204, description = "Notification deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("Bearer" = [])),
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = NotificationService::new(&state.db, &state.hub);
    service.delete(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the REST API: all HTTP endpoint paths, the DTO schemas they reference,
//! and the bearer-token security scheme. The generated document is served as
//! JSON and rendered by Swagger UI; see `router`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::model::{
    api::ErrorDto,
    auth::{LoginDto, RegisterDto, TokenDto, UserDto},
    customer::CustomerRecord,
    notification::{CreateNotificationDto, NotificationDto, PaginatedNotificationsDto},
};

/// Enrich the generated document with the bearer-token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "Bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Bearer token issued by the register and login endpoints."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Motorpool API",
        description = "Vehicle-task backend with bearer-token authentication and realtime notifications."
    ),
    security(("Bearer" = [])),
    paths(
        crate::controller::auth::register,
        crate::controller::auth::login,
        crate::controller::auth::get_user,
        crate::controller::notification::list_notifications,
        crate::controller::notification::create_notification,
        crate::controller::notification::mark_notification_read,
        crate::controller::notification::delete_notification,
        crate::controller::customer::list_customers,
    ),
    components(schemas(
        ErrorDto,
        RegisterDto,
        LoginDto,
        TokenDto,
        UserDto,
        NotificationDto,
        CreateNotificationDto,
        PaginatedNotificationsDto,
        CustomerRecord,
    )),
    tags(
        (name = "auth", description = "Registration, login, and the current user"),
        (name = "notifications", description = "Notification CRUD and delivery"),
        (name = "customers", description = "Configuration-bound customer records")
    )
)]
pub struct ApiDoc;

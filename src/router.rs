use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{
        auth::{get_user, login, register},
        customer::list_customers,
        notification::{
            create_notification, delete_notification, list_notifications, mark_notification_read,
        },
    },
    doc::ApiDoc,
    error::{config::ConfigError, AppError},
    hub,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/user", get(get_user))
        .route(
            "/api/notifications",
            get(list_notifications).post(create_notification),
        )
        .route("/api/notifications/{id}/read", put(mark_notification_read))
        .route("/api/notifications/{id}", delete(delete_notification))
        .route("/api/customers", get(list_customers))
        .route(
            hub::NOTIFICATIONS_HUB_PATH,
            get(hub::handler::notifications_hub),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Builds the named CORS policy from the configured origins.
///
/// Credentialed CORS forbids wildcard methods and headers, so the
/// browser-relevant sets are enumerated instead of using `Any`.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, AppError> {
    let origin_values = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "ALLOWED_ORIGINS".to_string(),
                    reason: format!("'{}' is not a valid origin", origin),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origin_values)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true))
}

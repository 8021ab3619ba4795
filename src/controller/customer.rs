use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{api::ErrorDto, customer::CustomerRecord},
    state::AppState,
};

/// Tag for grouping customer endpoints in OpenAPI documentation
pub static CUSTOMER_TAG: &str = "customers";

/// Get the configured customer records.
///
/// Returns the customer list bound from configuration at startup. Only
/// accessible by admins.
///
/// # Access Control
/// - `Admin` - Only admins can view customer records
///
/// # Returns
/// - `200 OK` - The configured customer records
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    responses(
        (status = 200, description = "The configured customer records", body = [CustomerRecord]),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
    security(("Bearer" = [])),
)]
pub async fn list_customers(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    Ok(Json(state.customers.as_ref().clone()))
}

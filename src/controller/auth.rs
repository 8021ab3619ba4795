use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::ErrorDto,
        auth::{LoginDto, RegisterDto, RegisterParams, TokenDto, UserDto},
    },
    service::auth::AuthService,
    state::AppState,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates an account with the given email, name, and password, then returns
/// a bearer token for the new account. When the mailer is configured a
/// welcome message is sent in the background; mail failures are logged and
/// never fail the registration.
///
/// # Arguments
/// - `state` - Application state containing the database connection and token service
/// - `payload` - Registration data (email, name, password)
///
/// # Returns
/// - `201 Created` - Account created, token response returned
/// - `400 Bad Request` - Invalid email, empty name, or short password
/// - `409 Conflict` - An account with this email already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = TokenDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterParams::from_dto(payload);

    let service = AuthService::new(&state.db, &state.tokens);
    let (user, token) = service.register(params).await?;

    // Welcome mail is best-effort and must not delay the response.
    if let Some(mailer) = state.mailer.clone() {
        let email = user.email.clone();
        let name = user.name.clone();
        tokio::spawn(async move {
            let body = format!("Hi {}, your account is ready.", name);
            if let Err(e) = mailer.send(&email, "Welcome", &body).await {
                tracing::warn!("Failed to send welcome mail to {}: {}", email, e);
            }
        });
    }

    Ok((
        StatusCode::CREATED,
        Json(token_response(&state, user, token)),
    ))
}

/// Log in with email and password.
///
/// Verifies the credentials and returns a bearer token. The same 401 is
/// returned for unknown emails and wrong passwords.
///
/// # Arguments
/// - `state` - Application state containing the database connection and token service
/// - `payload` - Login credentials (email, password)
///
/// # Returns
/// - `200 OK` - Credentials valid, token response returned
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials valid", body = TokenDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);
    let (user, token) = service.login(&payload.email, &payload.password).await?;

    Ok((StatusCode::OK, Json(token_response(&state, user, token))))
}

/// Get the current authenticated user.
///
/// # Arguments
/// - `state` - Application state containing the database connection and token service
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - The authenticated user
/// - `401 Unauthorized` - Missing, invalid, or expired token
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The authenticated user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("Bearer" = [])),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok(Json(UserDto::from_entity(user)))
}

fn token_response(state: &AppState, user: entity::user::Model, token: String) -> TokenDto {
    TokenDto {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: state.tokens.ttl_seconds(),
        user: UserDto::from_entity(user),
    }
}

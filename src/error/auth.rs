use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token was presented on a protected endpoint.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// The presented token failed signature or claim validation.
    ///
    /// Results in a 401 Unauthorized response. The underlying reason is kept
    /// server-side only.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// The presented token is past its expiry claim.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Bearer token has expired")]
    TokenExpired,

    /// Login was attempted with an unknown email or a wrong password.
    ///
    /// Results in a 401 Unauthorized response. The same message is returned
    /// for both cases so the endpoint does not reveal which emails exist.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration was attempted with an email that is already taken.
    ///
    /// Results in a 409 Conflict response.
    #[error("An account with email '{0}' already exists")]
    EmailTaken(String),

    /// A validated token references a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response. Occurs when an account is
    /// deleted while a token minted for it is still in circulation.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// An authenticated user attempted an operation above their permissions.
    ///
    /// Results in a 403 Forbidden response. The detail string is logged,
    /// never returned.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - For missing/invalid/expired tokens, bad credentials, and
///   tokens referencing deleted users
/// - 403 Forbidden - For permission failures
/// - 409 Conflict - For duplicate registration
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::TokenExpired => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            Self::EmailTaken(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "An account with this email already exists".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Access denied".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

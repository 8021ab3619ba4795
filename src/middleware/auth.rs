use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    service::token::TokenService,
};

pub enum Permission {
    Admin,
}

/// Authentication guard for protected endpoints.
///
/// Validates the bearer token from the Authorization header, loads the user
/// row it references, and checks any required permissions against the row
/// rather than the token claims, so revoking a permission takes effect
/// immediately instead of at token expiry.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;

        let claims = self.tokens.decode(token)?;

        let user_id: i32 = claims
            .sub
            .parse()
            .map_err(|_| AuthError::InvalidToken("subject is not a user id".to_string()))?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin operation without admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Extracts the bearer token from the Authorization header, if present.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

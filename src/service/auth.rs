//! Account registration and login.
//!
//! This module provides the `AuthService` for managing identity business logic:
//! creating accounts, verifying credentials, and minting bearer tokens for
//! authenticated sessions. Passwords are hashed with Argon2id and only the
//! hash is ever stored.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::auth::RegisterParams,
    service::token::TokenService,
};

const MIN_PASSWORD_LEN: usize = 8;

/// Service providing business logic for identity management.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token service used to mint bearer tokens
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account and mints a token for it.
    ///
    /// # Arguments
    /// - `params` - Normalized registration inputs
    ///
    /// # Returns
    /// - `Ok((user, token))` - The created account and a signed bearer token
    /// - `Err(AppError::BadRequest)` - Empty name, malformed email, or short password
    /// - `Err(AuthError::EmailTaken)` - An account with that email already exists
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(
        &self,
        params: RegisterParams,
    ) -> Result<(entity::user::Model, String), AppError> {
        validate_registration(&params)?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(AuthError::EmailTaken(params.email).into());
        }

        let password_hash = hash_password(&params.password)?;

        let user = user_repo
            .create(params.email, params.name, password_hash, false)
            .await?;

        let token = self.tokens.issue(&user)?;

        Ok((user, token))
    }

    /// Verifies credentials and mints a token.
    ///
    /// The same error is returned for unknown emails and wrong passwords so
    /// the endpoint does not reveal which accounts exist.
    ///
    /// # Arguments
    /// - `email` - Account email as submitted
    /// - `password` - Plaintext password as submitted
    ///
    /// # Returns
    /// - `Ok((user, token))` - The authenticated account and a signed bearer token
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(entity::user::Model, String), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&email.trim().to_lowercase()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&user)?;

        Ok((user, token))
    }
}

fn validate_registration(params: &RegisterParams) -> Result<(), AppError> {
    if params.name.is_empty() {
        return Err(AppError::BadRequest("Name must not be empty".to_string()));
    }
    if !params.email.contains('@') {
        return Err(AppError::BadRequest(
            "Email address is not valid".to_string(),
        ));
    }
    if params.password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Hashes a password with Argon2id, returning the PHC string format hash
/// that includes the algorithm parameters and salt.
pub(crate) fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))
}

/// Verifies a password against a stored PHC hash. Malformed stored hashes
/// count as a failed verification rather than an error.
pub(crate) fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Response body for successful register and login calls.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub user: UserDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}

impl UserDto {
    pub fn from_entity(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            admin: user.admin,
            created_at: user.created_at,
        }
    }
}

/// Validated inputs for account registration.
pub struct RegisterParams {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            email: dto.email.trim().to_lowercase(),
            name: dto.name.trim().to_string(),
            password: dto.password,
        }
    }
}

//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation and the lookups used by login and the auth guard.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user record.
    ///
    /// The caller is responsible for hashing the password; this method stores
    /// whatever hash string it is given.
    ///
    /// # Arguments
    /// - `email` - Unique account email, already normalized
    /// - `name` - Display name
    /// - `password_hash` - Argon2id hash of the account password
    /// - `admin` - Whether the account has admin permissions
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Database error during insert (including unique-email violations)
    pub async fn create(
        &self,
        email: String,
        name: String,
        password_hash: String,
        admin: bool,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            email: ActiveValue::Set(email),
            name: ActiveValue::Set(name),
            password_hash: ActiveValue::Set(password_hash),
            admin: ActiveValue::Set(admin),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a user by primary key.
    ///
    /// # Arguments
    /// - `id` - User ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by their unique email address.
    ///
    /// # Arguments
    /// - `email` - Account email, already normalized
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Checks whether any admin account exists.
    ///
    /// Used by the startup initializer to decide whether to seed the first
    /// admin user.
    ///
    /// # Returns
    /// - `Ok(bool)` - True when at least one admin account exists
    /// - `Err(DbErr)` - Database error during query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Admin.eq(true))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

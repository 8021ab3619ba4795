//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    hub::NotificationHub, model::customer::CustomerRecord, service::mailer::Mailer,
    service::token::TokenService,
};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` holds key material behind cheap clones
/// - `NotificationHub` shares one registry across clones
/// - `Mailer` wraps a `reqwest::Client`, which uses an `Arc` internally
/// - `Arc<Vec<CustomerRecord>>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Bearer-token minting and validation service.
    pub tokens: TokenService,

    /// Registry of live notifications hub connections.
    pub hub: NotificationHub,

    /// Outbound mailer; `None` when the mail settings section is absent.
    pub mailer: Option<Mailer>,

    /// Customer records bound from configuration at startup.
    pub customers: Arc<Vec<CustomerRecord>>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service configured with the signing key
    /// - `hub` - Notifications hub registry
    /// - `mailer` - Outbound mailer when mail is configured
    /// - `customers` - Configuration-bound customer records
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        hub: NotificationHub,
        mailer: Option<Mailer>,
        customers: Arc<Vec<CustomerRecord>>,
    ) -> Self {
        Self {
            db,
            tokens,
            hub,
            mailer,
            customers,
        }
    }
}

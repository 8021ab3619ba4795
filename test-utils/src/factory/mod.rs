//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let notification = factory::notification::create_notification(&db, user.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .email("custom@example.com")
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `notification` - Create notification entities
//! - `connection_id` - Create realtime connection records
//! - `helpers` - Shared ID generation utilities

pub mod connection_id;
pub mod helpers;
pub mod notification;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use connection_id::create_connection;
pub use notification::create_notification;
pub use user::create_user;

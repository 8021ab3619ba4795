//! HTTP request handlers.
//!
//! Controllers validate access through the auth guard, convert DTOs to
//! parameter models, call into the service layer, and convert results back
//! to DTOs. Each handler carries a `#[utoipa::path]` annotation feeding the
//! OpenAPI document.

pub mod auth;
pub mod customer;
pub mod notification;

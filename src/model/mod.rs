//! Wire DTOs and operation parameter models.
//!
//! DTOs derive `Serialize`/`Deserialize` for the HTTP boundary and
//! `utoipa::ToSchema` for the OpenAPI document. Parameter structs carry
//! validated operation inputs from controllers into services so the lower
//! layers never see raw request payloads.

pub mod api;
pub mod auth;
pub mod customer;
pub mod notification;

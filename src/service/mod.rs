//! Business logic layer.
//!
//! Services orchestrate repositories and infrastructure (token minting, the
//! notifications hub, outbound mail) on behalf of controllers. Controllers
//! convert DTOs to params before calling in; services never see raw request
//! payloads.

pub mod auth;
pub mod mailer;
pub mod notification;
pub mod token;

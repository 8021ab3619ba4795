//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and are the
//! only layer that touches the database; services orchestrate them and controllers never
//! call them directly.

pub mod connection_id;
pub mod notification;
pub mod user;

#[cfg(test)]
mod test;

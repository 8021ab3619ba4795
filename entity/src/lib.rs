pub mod prelude;

pub mod connection_id;
pub mod notification;
pub mod user;

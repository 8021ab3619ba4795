mod connection_id;
mod notification;
mod user;

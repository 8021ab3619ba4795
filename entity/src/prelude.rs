pub use super::connection_id::Entity as ConnectionId;
pub use super::notification::Entity as Notification;
pub use super::user::Entity as User;

//! Realtime notifications hub.
//!
//! Browser clients open a WebSocket at a fixed path and receive JSON-encoded
//! notification payloads pushed by the notification service. The hub keeps an
//! in-memory registry mapping connection ids to per-connection channels; the
//! durable side of the mapping (which connection belongs to which user) lives
//! in the `connection_id` table so pushes can target all live sessions of a
//! user.

pub mod handler;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{mpsc, RwLock};

/// Fixed mount path of the notifications hub WebSocket endpoint.
pub const NOTIFICATIONS_HUB_PATH: &str = "/notificationsHub";

/// In-memory registry of live hub connections.
///
/// Cloning is cheap: all clones share the same registry. A connection's
/// sender is registered before the socket upgrade completes and removed when
/// the socket closes; sends to a connection whose receiver is gone prune the
/// stale entry.
#[derive(Clone, Default)]
pub struct NotificationHub {
    senders: Arc<RwLock<HashMap<String, mpsc::UnboundedSender<String>>>>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a connection's outbound channel under its connection id.
    pub async fn register(&self, connection_id: String, tx: mpsc::UnboundedSender<String>) {
        self.senders.write().await.insert(connection_id, tx);
    }

    /// Removes a connection from the registry.
    pub async fn unregister(&self, connection_id: &str) {
        self.senders.write().await.remove(connection_id);
    }

    /// Sends a payload to each of the given connections.
    ///
    /// Connections without a registered sender are skipped; connections whose
    /// receiver has been dropped are pruned from the registry.
    ///
    /// # Arguments
    /// - `connection_ids` - Target connection ids, typically all rows for one user
    /// - `payload` - Serialized frame to push
    ///
    /// # Returns
    /// - `usize` - Number of connections the payload was delivered to
    pub async fn send_to(&self, connection_ids: &[String], payload: &str) -> usize {
        let mut delivered = 0;
        let mut dead = Vec::new();

        {
            let senders = self.senders.read().await;
            for connection_id in connection_ids {
                match senders.get(connection_id) {
                    Some(tx) if tx.send(payload.to_string()).is_ok() => delivered += 1,
                    Some(_) => dead.push(connection_id.clone()),
                    None => {}
                }
            }
        }

        if !dead.is_empty() {
            let mut senders = self.senders.write().await;
            for connection_id in dead {
                senders.remove(&connection_id);
            }
        }

        delivered
    }

    /// Number of live connections in the registry.
    pub async fn connection_count(&self) -> usize {
        self.senders.read().await.len()
    }
}

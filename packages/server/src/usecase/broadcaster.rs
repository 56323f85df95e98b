//! Fan-out of session notifications.
//!
//! At-most-once delivery: failures are logged and dropped, never retried.

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, MessagePusher, Notification, PusherChannel};

pub struct Broadcaster {
    pusher: Arc<dyn MessagePusher>,
}

impl Broadcaster {
    pub fn new(pusher: Arc<dyn MessagePusher>) -> Self {
        Self { pusher }
    }

    pub async fn register(&self, connection_id: ConnectionId, sender: PusherChannel) {
        self.pusher.register_client(connection_id, sender).await;
    }

    pub async fn unregister(&self, connection_id: &ConnectionId) {
        self.pusher.unregister_client(connection_id).await;
    }

    /// Deliver to every live connection in `registry`, joined or not.
    pub async fn to_all(&self, registry: &ConnectionRegistry, notification: Notification) {
        let targets = registry.connection_ids();
        let recipients = targets.len();
        match self.pusher.broadcast(targets, &notification).await {
            Ok(()) => tracing::debug!(
                event = notification.event_name(),
                recipients,
                "Broadcasted notification"
            ),
            Err(e) => tracing::warn!(
                event = notification.event_name(),
                error = %e,
                "Failed to broadcast notification"
            ),
        }
    }

    /// Deliver privately to one connection.
    pub async fn to_one(&self, connection_id: &ConnectionId, notification: Notification) {
        if let Err(e) = self.pusher.push_to(connection_id, &notification).await {
            tracing::warn!(
                event = notification.event_name(),
                connection_id = %connection_id,
                error = %e,
                "Failed to push notification"
            );
        }
    }
}

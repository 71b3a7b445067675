use super::AcknowledgementsService;
use crate::dto::output;
use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::sync::mpsc;

///
/// Queues read-acknowledgements on the push channel's outgoing event
/// queue. Acknowledgements raised while the channel is disconnected
/// are dropped: the unread backlog fetched on the next connection is
/// the authoritative recovery path.
///
pub struct AcknowledgementsServiceImpl {
    events_tx: mpsc::UnboundedSender<output::ClientEvent>,
    connected: Arc<AtomicBool>,
}

impl AcknowledgementsServiceImpl {
    pub fn new(
        events_tx: mpsc::UnboundedSender<output::ClientEvent>,
        connected: Arc<AtomicBool>,
    ) -> Self {
        Self {
            events_tx,
            connected,
        }
    }
}

#[async_trait]
impl AcknowledgementsService for AcknowledgementsServiceImpl {
    async fn send(&self, notification_id: i64) {
        if !self.connected.load(Ordering::Acquire) {
            tracing::trace!(
                notification_id,
                "push channel disconnected, dropping read-acknowledgement"
            );
            return;
        }

        let event = output::ClientEvent::MarkNotificationRead { notification_id };
        match self.events_tx.send(event) {
            Ok(()) => tracing::debug!(notification_id, "read-acknowledgement queued"),
            Err(_) => tracing::warn!(
                notification_id,
                "outgoing event queue closed, read-acknowledgement lost"
            ),
        }
    }
}

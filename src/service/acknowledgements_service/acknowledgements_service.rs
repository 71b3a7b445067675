use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AcknowledgementsService: Send + Sync {
    ///
    /// Emit a read-acknowledgement for a server-assigned notification.
    /// Fire-and-forget: emission failures are logged, never raised.
    ///
    async fn send(&self, notification_id: i64);
}

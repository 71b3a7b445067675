use crate::service::notification_center_service::NotificationId;
use async_trait::async_trait;

///
/// The rendering surface the lifecycle manager draws on. The host UI
/// owns the actual presentation; the manager only drives mount,
/// exit-transition and unmount of individual items.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SurfaceService: Send + Sync {
    ///
    /// Insert the rendered item. Mounting an identifier that is
    /// already present replaces its rendering.
    ///
    async fn mount(&self, id: &NotificationId, html: String);

    /// Start the item's exit transition.
    async fn set_hiding(&self, id: &NotificationId);

    /// Detach the item. No-op when the identifier is not mounted.
    async fn unmount(&self, id: &NotificationId);

    /// Drop every mounted item at once.
    async fn clear(&self);
}

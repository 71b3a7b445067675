use super::{
    dto::{Notification, NotificationId, NotificationKind},
    navigation::NavigationTarget,
};
use crate::dto::input;
use async_trait::async_trait;

///
/// Owns the in-page collection of visible notifications and merges the
/// three input sources (flash payloads, push channel, programmatic
/// calls) into one rendering and dismissal pipeline.
///
/// None of these operations fail: malformed input falls back to
/// defaults and missing targets are ignored.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationCenterService: Send + Sync {
    ///
    /// Show a notification. No-op when the identifier is already
    /// visible. `live` marks a just-arrived item: it is the only case
    /// eligible for the auto-dismiss countdown. Backlog items are
    /// shown without one regardless of their flag.
    ///
    async fn display(&self, notification: Notification, live: bool);

    ///
    /// Dismiss a notification. No-op when the identifier is not
    /// visible. Emits a read-acknowledgement when the identifier is
    /// server-assigned and the push channel is connected.
    ///
    async fn remove(&self, id: NotificationId);

    ///
    /// Dismiss without acknowledging. Used when the server itself
    /// reports the notification removed, so the removal is not echoed
    /// back as another acknowledgement.
    ///
    async fn discard(&self, id: NotificationId);

    ///
    /// Activate the notification's action: resolves the navigation
    /// target for the host to follow, then removes the notification
    /// the same way [NotificationCenterService::remove] does.
    ///
    /// ### Returns
    /// `None` when the identifier is not visible or carries no action.
    ///
    async fn activate_action(&self, id: NotificationId) -> Option<NavigationTarget>;

    ///
    /// Drain the page's flash payloads: each is shown once, in source
    /// order, staggered by the configured interval. Consumes the list
    /// so a re-render cannot replay it.
    ///
    async fn drain_flash(&self, payloads: Vec<input::FlashPayload>);

    ///
    /// Drop every visible notification and cancel every timer without
    /// emitting acknowledgements. Used on back-forward-cache
    /// restoration, where the snapshot reflects stale state.
    ///
    async fn clear_all(&self);

    ///
    /// Show a programmatic notification with a synthesized local
    /// identifier. `auto_dismiss` of `None` takes the kind's default.
    ///
    /// ### Returns
    /// The synthesized identifier, so the caller can force early
    /// removal.
    ///
    async fn notify(
        &self,
        kind: NotificationKind,
        message: String,
        auto_dismiss: Option<bool>,
    ) -> NotificationId;

    async fn success(&self, message: String) -> NotificationId;

    /// Errors require explicit dismissal unless overridden via
    /// [NotificationCenterService::notify].
    async fn error(&self, message: String) -> NotificationId;

    async fn warning(&self, message: String) -> NotificationId;

    async fn info(&self, message: String) -> NotificationId;
}

use super::NotificationPayload;
use serde::Deserialize;

///
/// Frame received over the push channel: `{ "event": ..., "data": ... }`
///
#[derive(Debug, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Backlog response: every not-yet-acknowledged notification.
    UnreadNotifications(UnreadNotifications),

    /// A notification created while this client is connected.
    NewNotification(NotificationPayload),

    /// Cross-session sync: the notification was acknowledged elsewhere.
    NotificationRemoved(NotificationRemoved),
}

#[derive(Debug, Deserialize)]
pub struct UnreadNotifications {
    pub notifications: Vec<NotificationPayload>,
}

#[derive(Debug, Deserialize)]
pub struct NotificationRemoved {
    pub id: i64,
}

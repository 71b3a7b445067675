use serde::Serialize;

///
/// Frame sent over the push channel: `{ "event": ..., "data": ... }`
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Request the unread backlog. Sent once per successful connection.
    GetUnreadNotifications,

    /// Read-acknowledgement for a server-assigned notification.
    MarkNotificationRead { notification_id: i64 },
}

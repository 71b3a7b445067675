use super::{NotificationAction, NotificationId, NotificationKind};
use crate::dto::input;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

///
/// A notification as the lifecycle manager sees it.
///
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,

    /// Used only for relative-age display. Absent renders "Just now".
    pub created_at: Option<OffsetDateTime>,

    pub auto_dismiss: bool,
    pub action: Option<NotificationAction>,
}

impl Notification {
    ///
    /// Build a notification from a push-channel payload.
    /// Malformed kinds, timestamps and actions fall back to defaults.
    ///
    pub fn from_payload(payload: input::NotificationPayload) -> Self {
        let kind = NotificationKind::parse_lenient(&payload.kind);
        let auto_dismiss = payload
            .auto_dismiss
            .unwrap_or_else(|| kind.default_auto_dismiss());
        let action =
            NotificationAction::parse_lenient(payload.action_type.as_deref(), payload.action_data);

        Self {
            id: NotificationId::Server(payload.id),
            kind,
            message: payload.message,
            created_at: parse_timestamp(payload.created_at.as_deref()),
            auto_dismiss,
            action,
        }
    }

    ///
    /// Build a notification from a server-rendered flash payload.
    /// Flash notifications carry no action.
    ///
    pub fn from_flash(id: NotificationId, payload: input::FlashPayload) -> Self {
        let kind = NotificationKind::parse_lenient(&payload.kind);

        Self {
            id,
            kind,
            message: payload.message,
            created_at: parse_timestamp(payload.timestamp.as_deref()),
            auto_dismiss: kind.default_auto_dismiss(),
            action: None,
        }
    }
}

fn parse_timestamp(timestamp: Option<&str>) -> Option<OffsetDateTime> {
    let timestamp = timestamp?;
    match OffsetDateTime::parse(timestamp, &Rfc3339) {
        Ok(datetime) => Some(datetime),
        Err(err) => {
            tracing::debug!(timestamp, %err, "malformed timestamp, falling back to none");
            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_payload_full() {
        let payload = input::NotificationPayload {
            id: 7,
            kind: "attendance".to_string(),
            message: "Marked present".to_string(),
            created_at: Some("2026-08-30T10:00:00Z".to_string()),
            auto_dismiss: Some(true),
            action_type: Some("view_attendance".to_string()),
            action_data: Some(json!({ "subject_name": "Maths" })),
        };

        let notification = Notification::from_payload(payload);

        assert_eq!(notification.id, NotificationId::Server(7));
        assert_eq!(notification.kind, NotificationKind::Attendance);
        assert!(notification.auto_dismiss);
        assert!(notification.created_at.is_some());
        assert!(notification.action.is_some());
    }

    #[test]
    fn from_payload_defaults_auto_dismiss_by_kind() {
        let payload = input::NotificationPayload {
            id: 1,
            kind: "error".to_string(),
            message: "Something failed".to_string(),
            created_at: None,
            auto_dismiss: None,
            action_type: None,
            action_data: None,
        };

        let notification = Notification::from_payload(payload);

        assert!(!notification.auto_dismiss);
    }

    #[test]
    fn from_payload_malformed_fields_fall_back() {
        let payload = input::NotificationPayload {
            id: 2,
            kind: "nonsense".to_string(),
            message: "Hi".to_string(),
            created_at: Some("yesterday-ish".to_string()),
            auto_dismiss: None,
            action_type: Some("do_something_weird".to_string()),
            action_data: None,
        };

        let notification = Notification::from_payload(payload);

        assert_eq!(notification.kind, NotificationKind::Info);
        assert!(notification.created_at.is_none());
        assert!(notification.action.is_none());
        assert!(notification.auto_dismiss);
    }

    #[test]
    fn from_flash_error_kind_requires_explicit_dismissal() {
        let payload = input::FlashPayload {
            kind: "error".to_string(),
            message: "Save failed".to_string(),
            timestamp: None,
        };

        let notification =
            Notification::from_flash(NotificationId::Flash("1-0".to_string()), payload);

        assert!(!notification.auto_dismiss);
        assert!(notification.created_at.is_none());
        assert!(notification.action.is_none());
    }
}

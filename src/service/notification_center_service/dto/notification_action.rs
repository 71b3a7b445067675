use std::str::FromStr;

///
/// Quick action attached to a notification: the action kind picks the
/// navigation target, `data` optionally parameterizes it.
///
#[derive(Debug, Clone)]
pub struct NotificationAction {
    pub kind: ActionKind,
    pub data: Option<serde_json::Value>,
}

impl NotificationAction {
    ///
    /// Build an action from wire fields. Unknown action kinds are
    /// dropped so the notification still renders without a control.
    ///
    pub fn parse_lenient(
        action_type: Option<&str>,
        action_data: Option<serde_json::Value>,
    ) -> Option<Self> {
        let action_type = action_type?;
        match ActionKind::from_str(action_type) {
            Ok(kind) => Some(Self {
                kind,
                data: action_data,
            }),
            Err(_) => {
                tracing::debug!(action_type, "unknown action kind, dropping action");
                None
            }
        }
    }

    /// Integer field extracted from `data`, for parameterized targets.
    pub fn data_i64(&self, key: &str) -> Option<i64> {
        self.data.as_ref()?.get(key)?.as_i64()
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    ViewAttendance,
    ReviewEnrollment,
    ViewEnrollments,
    ViewAssignment,
    ReviewQuery,
    ViewQueries,
}

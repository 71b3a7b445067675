use std::str::FromStr;

///
/// Category of a notification. Selects the icon and, for
/// [NotificationKind::Enrollment] and [NotificationKind::Query],
/// an action control.
///
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
    Attendance,
    Enrollment,
    Query,
    Assignment,
}

impl NotificationKind {
    ///
    /// Parse a wire kind, falling back to [NotificationKind::Info]
    /// for anything unknown.
    ///
    pub fn parse_lenient(kind: &str) -> Self {
        match Self::from_str(kind) {
            Ok(kind) => kind,
            Err(_) => {
                tracing::debug!(kind, "unknown notification kind, falling back to info");
                NotificationKind::Info
            }
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "fa-check-circle",
            NotificationKind::Error => "fa-times-circle",
            NotificationKind::Warning => "fa-exclamation-triangle",
            NotificationKind::Info => "fa-info-circle",
            NotificationKind::Attendance => "fa-user-check",
            NotificationKind::Enrollment => "fa-user-plus",
            NotificationKind::Query => "fa-question-circle",
            NotificationKind::Assignment => "fa-chalkboard-teacher",
        }
    }

    ///
    /// Errors require an explicit dismissal, everything else
    /// auto-dismisses by default.
    ///
    pub fn default_auto_dismiss(&self) -> bool {
        !matches!(self, NotificationKind::Error)
    }

    /// The two kinds whose rendering carries an action button.
    pub fn has_action_control(&self) -> bool {
        matches!(self, NotificationKind::Enrollment | NotificationKind::Query)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_lenient_known_kind() {
        assert_eq!(
            NotificationKind::parse_lenient("attendance"),
            NotificationKind::Attendance
        );
    }

    #[test]
    fn parse_lenient_unknown_kind_falls_back_to_info() {
        assert_eq!(
            NotificationKind::parse_lenient("definitely-not-a-kind"),
            NotificationKind::Info
        );
    }

    #[test]
    fn wire_form_is_snake_case() {
        assert_eq!(NotificationKind::Enrollment.to_string(), "enrollment");
        assert_eq!(NotificationKind::Success.to_string(), "success");
    }

    #[test]
    fn only_error_requires_explicit_dismissal() {
        assert!(!NotificationKind::Error.default_auto_dismiss());
        assert!(NotificationKind::Warning.default_auto_dismiss());
        assert!(NotificationKind::Attendance.default_auto_dismiss());
    }

    #[test]
    fn action_control_limited_to_enrollment_and_query() {
        assert!(NotificationKind::Enrollment.has_action_control());
        assert!(NotificationKind::Query.has_action_control());
        assert!(!NotificationKind::Success.has_action_control());
        assert!(!NotificationKind::Attendance.has_action_control());
    }
}

use super::dto::{ActionKind, NotificationAction};

///
/// Where an activated action takes the viewer. One target per action
/// kind, optionally parameterized by an identifier carried in the
/// action data.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    AttendanceView,
    EnrollmentReview { enrollment_id: Option<i64> },
    EnrollmentList,
    AssignmentView,
    QueryInspector { query_id: Option<i64> },
    QueryList,
}

impl NavigationTarget {
    pub fn path(&self) -> String {
        match self {
            NavigationTarget::AttendanceView => "/student/attendance".to_string(),
            NavigationTarget::EnrollmentReview {
                enrollment_id: Some(id),
            } => format!("/teacher/enrollments/{id}"),
            NavigationTarget::EnrollmentReview {
                enrollment_id: None,
            } => "/teacher/enrollments/pending".to_string(),
            NavigationTarget::EnrollmentList => "/student/enrollments".to_string(),
            NavigationTarget::AssignmentView => "/teacher/classes".to_string(),
            NavigationTarget::QueryInspector { query_id: Some(id) } => {
                format!("/admin/queries/{id}")
            }
            NavigationTarget::QueryInspector { query_id: None } => "/admin/queries".to_string(),
            NavigationTarget::QueryList => "/student/queries".to_string(),
        }
    }
}

pub fn navigation_target(action: &NotificationAction) -> NavigationTarget {
    match action.kind {
        ActionKind::ViewAttendance => NavigationTarget::AttendanceView,
        ActionKind::ReviewEnrollment => NavigationTarget::EnrollmentReview {
            enrollment_id: action.data_i64("enrollment_id"),
        },
        ActionKind::ViewEnrollments => NavigationTarget::EnrollmentList,
        ActionKind::ViewAssignment => NavigationTarget::AssignmentView,
        ActionKind::ReviewQuery => NavigationTarget::QueryInspector {
            query_id: action.data_i64("query_id"),
        },
        ActionKind::ViewQueries => NavigationTarget::QueryList,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn review_enrollment_parameterized() {
        let action = NotificationAction {
            kind: ActionKind::ReviewEnrollment,
            data: Some(json!({ "enrollment_id": 123 })),
        };

        let target = navigation_target(&action);

        assert_eq!(
            target,
            NavigationTarget::EnrollmentReview {
                enrollment_id: Some(123)
            }
        );
        assert_eq!(target.path(), "/teacher/enrollments/123");
    }

    #[test]
    fn review_query_without_identifier_falls_back_to_list_route() {
        let action = NotificationAction {
            kind: ActionKind::ReviewQuery,
            data: Some(json!({ "query_title": "Lost ID card" })),
        };

        let target = navigation_target(&action);

        assert_eq!(target, NavigationTarget::QueryInspector { query_id: None });
        assert_eq!(target.path(), "/admin/queries");
    }

    #[test]
    fn unparameterized_targets() {
        let action = NotificationAction {
            kind: ActionKind::ViewAttendance,
            data: None,
        };
        assert_eq!(
            navigation_target(&action).path(),
            "/student/attendance"
        );

        let action = NotificationAction {
            kind: ActionKind::ViewQueries,
            data: None,
        };
        assert_eq!(navigation_target(&action).path(), "/student/queries");
    }
}

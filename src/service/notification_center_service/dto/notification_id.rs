use std::fmt::{self, Display};

///
/// Identifier of a visible notification.
///
/// Only [NotificationId::Server] identifiers exist on the server and are
/// acknowledged back on removal. [NotificationId::Flash] and
/// [NotificationId::Local] identifiers are synthesized on the client
/// (millisecond timestamp plus a sequence number) and never leave it.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NotificationId {
    Server(i64),
    Flash(String),
    Local(String),
}

impl NotificationId {
    pub fn is_server_assigned(&self) -> bool {
        matches!(self, NotificationId::Server(_))
    }
}

impl Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationId::Server(id) => write!(f, "{id}"),
            NotificationId::Flash(suffix) => write!(f, "flash-{suffix}"),
            NotificationId::Local(suffix) => write!(f, "local-{suffix}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn only_server_identifiers_are_server_assigned() {
        assert!(NotificationId::Server(42).is_server_assigned());
        assert!(!NotificationId::Flash("1-0".to_string()).is_server_assigned());
        assert!(!NotificationId::Local("1-0".to_string()).is_server_assigned());
    }

    #[test]
    fn display_keeps_identifier_classes_distinguishable() {
        assert_eq!(NotificationId::Server(42).to_string(), "42");
        assert_eq!(
            NotificationId::Flash("17-0".to_string()).to_string(),
            "flash-17-0"
        );
        assert_eq!(
            NotificationId::Local("17-1".to_string()).to_string(),
            "local-17-1"
        );
    }
}

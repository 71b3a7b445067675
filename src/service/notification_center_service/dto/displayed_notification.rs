use super::Notification;
use tokio::task::JoinHandle;

///
/// Entry of the identifier-keyed collection of visible notifications.
///
pub(crate) struct DisplayedNotification {
    pub notification: Notification,
    pub state: DisplayState,

    /// Pending auto-dismiss timer. At most one per entry.
    pub dismiss_timer: Option<JoinHandle<()>>,
}

///
/// A notification is `Visible` from mount until removal starts,
/// `Hiding` while its exit transition runs. The entry is deleted
/// (and the identifier freed) only after the transition completes.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DisplayState {
    Visible,
    Hiding,
}

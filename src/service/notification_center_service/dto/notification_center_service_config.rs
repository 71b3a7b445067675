use std::time::Duration;

#[derive(Debug, Clone)]
pub struct NotificationCenterServiceConfig {
    /// Countdown started for live notifications with auto-dismiss set.
    pub auto_dismiss_delay: Duration,

    /// Time the exit transition is given before the item is unmounted
    /// and its identifier freed.
    pub exit_transition_delay: Duration,

    /// Offset between consecutive flash payloads so their entrance
    /// animations do not collide.
    pub flash_stagger_interval: Duration,
}

impl Default for NotificationCenterServiceConfig {
    fn default() -> Self {
        Self {
            auto_dismiss_delay: Duration::from_millis(6000),
            exit_transition_delay: Duration::from_millis(300),
            flash_stagger_interval: Duration::from_millis(200),
        }
    }
}

mod displayed_notification;
mod notification;
mod notification_action;
mod notification_center_service_config;
mod notification_id;
mod notification_kind;

pub(crate) use displayed_notification::*;
pub use notification::*;
pub use notification_action::*;
pub use notification_center_service_config::*;
pub use notification_id::*;
pub use notification_kind::*;

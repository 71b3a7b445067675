pub mod client;
pub mod dto;
pub mod service;

pub use client::NotifierClient;
pub use service::notification_center_service::{
    ActionKind, NavigationTarget, Notification, NotificationCenterService,
    NotificationCenterServiceConfig, NotificationId, NotificationKind,
};

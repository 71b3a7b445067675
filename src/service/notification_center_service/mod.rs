mod dto;
mod navigation;
mod notification_center_service;
mod notification_center_service_impl;
mod render;

pub use dto::*;
pub use navigation::*;
pub use notification_center_service::*;
pub use notification_center_service_impl::*;

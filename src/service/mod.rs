pub mod acknowledgements_service;
pub mod notification_center_service;
pub mod push_channel_service;
pub mod surface_service;

mod flash_payload;
mod notification_payload;
mod server_event;

pub use flash_payload::*;
pub use notification_payload::*;
pub use server_event::*;

mod error;
mod push_channel_connection;

pub use push_channel_connection::*;

mod notifier_client;

pub use notifier_client::*;

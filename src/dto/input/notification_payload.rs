use serde::Deserialize;

///
/// Notification as delivered by the push channel.
///
/// Every field except `id` and `message` is parsed leniently: unknown
/// kinds, unknown actions and malformed timestamps fall back to defaults
/// instead of rejecting the whole payload.
///
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationPayload {
    pub id: i64,

    #[serde(rename = "type")]
    pub kind: String,

    pub message: String,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub auto_dismiss: Option<bool>,

    #[serde(default)]
    pub action_type: Option<String>,

    #[serde(default)]
    pub action_data: Option<serde_json::Value>,
}

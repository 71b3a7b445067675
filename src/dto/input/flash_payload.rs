use serde::Deserialize;

///
/// One-shot notification embedded in the initial page render.
/// The page hands the whole list over at load time; draining it
/// consumes the list so it cannot be replayed.
///
#[derive(Debug, Clone, Deserialize)]
pub struct FlashPayload {
    #[serde(rename = "type")]
    pub kind: String,

    pub message: String,

    /// RFC 3339 timestamp. Absent for flashes created during this render.
    #[serde(default)]
    pub timestamp: Option<String>,
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Message - one inbox entry captured from the portal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Portal-assigned identifier (the message link), unique per inbox
    pub message_id: String,

    pub sender: String,

    pub subject: String,

    /// Local send time as shown by the portal
    #[serde(with = "portal_datetime")]
    pub sent_at: NaiveDateTime,

    /// Plain-text body, newlines preserved
    pub content: String,
}

/// Accepts both `2024-03-01 07:45:00` (portal listing) and ISO-8601 `T`
/// separated timestamps; always writes ISO-8601.
pub mod portal_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const PORTAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
    const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(raw, PORTAL_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(raw, ISO_FORMAT))
            .ok()
    }

    pub fn format(value: &NaiveDateTime) -> String {
        value.format(ISO_FORMAT).to_string()
    }

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("cannot parse message timestamp: {raw}"))
        })
    }
}

//! Wire records exchanged with the dashboard backend.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// --- Accounts ---

/// A linked social-media account. Identity is `(username, platform)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub followers_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub following_count: u64,
}

impl Account {
    /// Platform label, `Unknown` when the backend omitted it.
    pub fn platform_label(&self) -> &str {
        match self.platform.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddAccountRequest {
    pub platform: String,
    pub username: String,
}

// --- Posts ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Published,
    Scheduled,
    /// Any status this client does not display (e.g. `failed`, `draft`),
    /// including a missing one.
    #[serde(other)]
    #[default]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: PostStatus,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchedulePostRequest {
    pub content: String,
    /// UTC, `YYYY-MM-DDTHH:MM:SS.mmmZ`
    pub scheduled_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchedulePostResponse {
    #[serde(default)]
    pub msg: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub scheduled_time: Option<DateTime<Utc>>,
}

// --- Followers / following ---

/// One entry of the followers or following list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub profile_pic_url: Option<String>,
}

// --- Timestamps ---

/// Parse a backend timestamp. RFC 3339 values keep their offset; naive values
/// (no zone designator) are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

// Present-but-unreadable fields decode to their empty value.

/// Unparseable or non-string timestamps become `None` (shown as `Invalid Date`).
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => parse_timestamp(&s),
        _ => None,
    })
}

fn lenient_status<'de, D>(deserializer: D) -> Result<PostStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default())
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| v.as_u64()).unwrap_or(0))
}

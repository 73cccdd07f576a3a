//! Deadline parsing for the board wire format.
//!
//! Board clients store the raw value of a date picker, so a deadline may be
//! a full RFC 3339 timestamp or a bare `YYYY-MM-DD` date. Bare dates are read
//! as midnight UTC. An empty string means no deadline.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, de::Error as _};

/// Parses a deadline from either accepted textual form.
///
/// Returns `Ok(None)` for a blank value.
///
/// # Errors
///
/// Returns a message naming the value when it is neither RFC 3339 nor a
/// `YYYY-MM-DD` date.
pub fn parse_deadline(raw: &str) -> Result<Option<DateTime<Utc>>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Some(timestamp.with_timezone(&Utc)));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| Some(date.and_time(NaiveTime::MIN).and_utc()))
        .map_err(|_| format!("invalid deadline {trimmed:?}, expected RFC 3339 or YYYY-MM-DD"))
}

/// Deserializes an optional deadline in either accepted form.
pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map_or(Ok(None), |raw| parse_deadline(&raw).map_err(D::Error::custom))
}

/// Deserializes a deadline edit, keeping an explicit `null` apart from an
/// absent field.
pub(crate) fn deserialize_edit<'de, D>(
    deserializer: D,
) -> Result<Option<Option<DateTime<Utc>>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize(deserializer).map(Some)
}

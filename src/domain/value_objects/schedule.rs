//! Staging-window timestamps
//!
//! The package list carries `StagingStart`/`StagingEnd` either as strings or
//! as Unix seconds. They never affect the hierarchy; they only feed the
//! `scheduledDateTime` annotation shown on non-public paks.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default display format, e.g. `Jan 05 2018 14:00`
pub const DEFAULT_DISPLAY_FORMAT: &str = "%b %d %Y %H:%M";

/// String layouts accepted besides RFC 3339 (interpreted as UTC)
const NAIVE_LAYOUTS: &[&str] = &["%b %d %Y %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Raw timestamp as it appears on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Epoch(f64),
    Text(String),
}

impl Timestamp {
    /// Parse into an instant. Returns `None` for unparseable values and for
    /// instants at or before the Unix epoch.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let parsed = match self {
            Timestamp::Epoch(secs) => epoch_to_datetime(*secs),
            Timestamp::Text(text) => parse_text(text.trim()),
        }?;

        (parsed.timestamp() > 0).then_some(parsed)
    }
}

fn epoch_to_datetime(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() || secs >= i64::MAX as f64 || secs < i64::MIN as f64 {
        return None;
    }
    DateTime::from_timestamp(secs.trunc() as i64, 0)
}

fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, layout) {
            return Some(naive.and_utc());
        }
    }

    text.parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}

/// Check a chrono format string before it reaches `DateTime::format`.
pub fn is_valid_display_format(format: &str) -> bool {
    !format.is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Build the staging-window annotation.
///
/// - both valid: `"START to END"`
/// - start only: `"START - No End"`
/// - end only: `"No Start - END"`
/// - neither: `None`
pub fn scheduled_date_time(
    start: Option<&Timestamp>,
    end: Option<&Timestamp>,
    display_format: &str,
) -> Option<String> {
    let format = if is_valid_display_format(display_format) {
        display_format
    } else {
        DEFAULT_DISPLAY_FORMAT
    };

    let start = start.and_then(Timestamp::to_datetime);
    let end = end.and_then(Timestamp::to_datetime);

    match (start, end) {
        (Some(s), Some(e)) => Some(format!("{} to {}", s.format(format), e.format(format))),
        (Some(s), None) => Some(format!("{} - No End", s.format(format))),
        (None, Some(e)) => Some(format!("No Start - {}", e.format(format))),
        (None, None) => None,
    }
}

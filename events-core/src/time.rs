//! Event timestamps.
//!
//! The backend stores whatever string the client sent, so an event's
//! start and end can be either an RFC 3339 instant
//! (`2023-03-10T18:00:00.000Z`) or a bare `datetime-local` value
//! (`2023-03-10T18:00`). `EventTime` keeps the raw string for
//! round-tripping and parses leniently on demand.

use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Format used by `datetime-local` inputs.
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

const NAIVE_FORMATS: &[&str] = &[DATETIME_LOCAL_FORMAT, "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventTime(String);

impl EventTime {
    pub fn new(raw: impl Into<String>) -> Self {
        EventTime(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Parse into a naive date-time in the local time zone.
    /// Instants carrying an offset are converted to local time first.
    pub fn to_local(&self) -> Option<NaiveDateTime> {
        let raw = self.0.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Local).naive_local());
        }

        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    }

    /// `YYYY-MM-DDTHH:MM` in local time, for pre-filling the edit form.
    /// Unparseable input yields an empty string.
    pub fn to_datetime_local(&self) -> String {
        self.to_local()
            .map(|dt| dt.format(DATETIME_LOCAL_FORMAT).to_string())
            .unwrap_or_default()
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventTime {
    fn from(raw: &str) -> Self {
        EventTime::new(raw)
    }
}

impl From<String> for EventTime {
    fn from(raw: String) -> Self {
        EventTime(raw)
    }
}

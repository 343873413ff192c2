use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Task identity: the creation timestamp in epoch milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub i64);

impl TodoId {
    /// ID derived from a creation instant
    pub fn from_instant(at: DateTime<Utc>) -> Self {
        TodoId(at.timestamp_millis())
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(TodoId)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Assigned once at creation, never reused or mutated
    pub id: TodoId,
    /// Trimmed, non-empty text
    pub text: String,
    pub completed: bool,
    /// ISO-8601 UTC timestamp, e.g. `2025-05-14T09:30:00.123Z`
    pub created_at: String,
}

impl Todo {
    /// Create an incomplete task. `text` must already be trimmed.
    pub fn new(id: TodoId, text: String, created_at: DateTime<Utc>) -> Self {
        Todo {
            id,
            text,
            completed: false,
            created_at: iso_timestamp(created_at),
        }
    }
}

/// Format an instant the way the storage format expects (millisecond precision, `Z` suffix)
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

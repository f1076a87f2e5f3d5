//! Response records and the ledger they are collected in.
//!
//! The serialized shape is fixed by the storage key's existing data:
//!
//! ```json
//! { "yes": [ { "name": "...", "email": "...", "timestamp": "..." } ],
//!   "no":  [ { "message": "...", "timestamp": "..." } ] }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored in place of a blank decline message.
pub const NO_MESSAGE_PLACEHOLDER: &str = "(No message)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    Yes,
    No,
}

impl ResponseKind {
    pub fn label(self) -> &'static str {
        match self {
            ResponseKind::Yes => "yes",
            ResponseKind::No => "no",
        }
    }
}

/// A "yes" response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accepted {
    pub name: String,
    pub email: String,
    #[serde(rename = "timestamp", with = "iso_millis")]
    pub submitted_at: DateTime<Utc>,
}

impl Accepted {
    pub fn new(name: impl Into<String>, email: impl Into<String>, submitted_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            submitted_at,
        }
    }
}

/// A "no" response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declined {
    pub message: String,
    #[serde(rename = "timestamp", with = "iso_millis")]
    pub submitted_at: DateTime<Utc>,
}

impl Declined {
    /// Builds a decline, trimming the message and substituting
    /// [`NO_MESSAGE_PLACEHOLDER`] when nothing is left.
    pub fn with_message(message: &str, submitted_at: DateTime<Utc>) -> Self {
        let trimmed = message.trim();
        let message = if trimmed.is_empty() {
            NO_MESSAGE_PLACEHOLDER.to_string()
        } else {
            trimmed.to_string()
        };
        Self {
            message,
            submitted_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseRecord {
    Accepted(Accepted),
    Declined(Declined),
}

impl ResponseRecord {
    pub fn kind(&self) -> ResponseKind {
        match self {
            ResponseRecord::Accepted(_) => ResponseKind::Yes,
            ResponseRecord::Declined(_) => ResponseKind::No,
        }
    }
}

/// Aggregate counts shown to visitors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub yes: usize,
    pub no: usize,
}

/// One slot in a response list. Entries written by something other than this
/// app may not match the record shape; they are carried along untouched so a
/// later write never drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LedgerEntry<T> {
    Record(T),
    Unreadable(serde_json::Value),
}

impl<T> LedgerEntry<T> {
    pub fn record(&self) -> Option<&T> {
        match self {
            LedgerEntry::Record(r) => Some(r),
            LedgerEntry::Unreadable(_) => None,
        }
    }
}

/// Both response lists in insertion order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseLedger {
    #[serde(default)]
    pub yes: Vec<LedgerEntry<Accepted>>,
    #[serde(default)]
    pub no: Vec<LedgerEntry<Declined>>,
}

impl ResponseLedger {
    pub fn push(&mut self, record: ResponseRecord) {
        match record {
            ResponseRecord::Accepted(r) => self.yes.push(LedgerEntry::Record(r)),
            ResponseRecord::Declined(r) => self.no.push(LedgerEntry::Record(r)),
        }
    }

    /// Readable "yes" records, skipping unreadable entries.
    pub fn accepted(&self) -> impl Iterator<Item = &Accepted> {
        self.yes.iter().filter_map(LedgerEntry::record)
    }

    pub fn declined(&self) -> impl Iterator<Item = &Declined> {
        self.no.iter().filter_map(LedgerEntry::record)
    }

    /// Every stored entry counts, readable or not.
    pub fn counts(&self) -> Counts {
        Counts {
            yes: self.yes.len(),
            no: self.no.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.yes.len() + self.no.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2026-03-01T06:30:00.000Z`.
/// Any RFC 3339 offset is accepted when reading.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

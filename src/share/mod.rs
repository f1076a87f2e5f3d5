//! Sharing the event link: clipboard copy, share-intent URLs for third-party
//! sites, and an optional external "native" share command.

pub mod clipboard;
pub mod intent;
pub mod launcher;

pub use intent::SharePlatform;

/// Result of one share attempt. A cancel is an ordinary outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Completed,
    Cancelled,
    Failed(String),
}

/// What the native share command is handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

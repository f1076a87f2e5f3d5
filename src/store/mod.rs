//! Response persistence.
//!
//! The ledger of accepted and declined responses lives under a single key in
//! a profile-local key-value store. [`ResponseStore`] owns the read-modify-write
//! cycle; [`kv`] provides the storage backends.

pub mod kv;
pub mod ledger;
pub mod response_store;

use std::path::PathBuf;
use thiserror::Error;

pub use kv::{FileKvStore, KeyValueStore, MemoryKvStore};
pub use ledger::{Accepted, Counts, Declined, LedgerEntry, ResponseKind, ResponseLedger, ResponseRecord};
pub use response_store::ResponseStore;

/// Errors raised while writing to (or reading the raw file behind) the
/// key-value store. Ledger reads never surface these; see
/// [`ResponseStore::load`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("storage file {path} is not a JSON object: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize responses: {0}")]
    Serialize(#[from] serde_json::Error),
}

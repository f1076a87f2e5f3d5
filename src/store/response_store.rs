use super::kv::KeyValueStore;
use super::ledger::{Counts, ResponseLedger, ResponseRecord};
use super::StoreError;

pub const DEFAULT_STORAGE_KEY: &str = "dkd-run-2026-responses";

/// Owns the persisted response ledger.
///
/// Nothing is cached: every call re-reads the backing store, and every append
/// writes the whole ledger back in a single `set`.
pub struct ResponseStore {
    backend: Box<dyn KeyValueStore>,
    key: String,
}

impl ResponseStore {
    pub fn new(backend: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Current ledger. Absent, unreadable or unparsable data yields an empty
    /// ledger; the failure is logged and never returned. Individual entries
    /// that don't parse as records are kept as they are.
    pub fn load(&self) -> ResponseLedger {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return ResponseLedger::default(),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "response storage unreadable, using empty ledger");
                return ResponseLedger::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(ledger) => ledger,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "stored responses unparsable, using empty ledger");
                ResponseLedger::default()
            }
        }
    }

    /// Appends `record` to the end of its list and persists the result.
    pub fn append(&mut self, record: ResponseRecord) -> Result<ResponseLedger, StoreError> {
        let kind = record.kind();
        let mut ledger = self.load();
        ledger.push(record);
        self.save(&ledger)?;

        let counts = ledger.counts();
        tracing::info!(
            kind = kind.label(),
            yes = counts.yes,
            no = counts.no,
            "response recorded"
        );
        Ok(ledger)
    }

    pub fn save(&mut self, ledger: &ResponseLedger) -> Result<(), StoreError> {
        let raw = serde_json::to_string(ledger)?;
        self.backend.set(&self.key, &raw)
    }

    pub fn counts(&self) -> Counts {
        self.load().counts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::kv::{FileKvStore, MemoryKvStore};
    use crate::store::ledger::{Accepted, Declined, LedgerEntry, NO_MESSAGE_PLACEHOLDER};
    use chrono::Utc;

    fn store_with(raw: Option<&str>) -> ResponseStore {
        let mut kv = MemoryKvStore::new();
        if let Some(raw) = raw {
            kv = kv.with_entry(DEFAULT_STORAGE_KEY, raw);
        }
        ResponseStore::new(Box::new(kv), DEFAULT_STORAGE_KEY)
    }

    fn yes(name: &str, email: &str) -> ResponseRecord {
        ResponseRecord::Accepted(Accepted::new(name, email, Utc::now()))
    }

    fn no(message: &str) -> ResponseRecord {
        ResponseRecord::Declined(Declined::with_message(message, Utc::now()))
    }

    struct ReadOnlyKv;

    impl KeyValueStore for ReadOnlyKv {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io {
                path: "quota".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "quota exceeded"),
            })
        }
    }

    #[test]
    fn test_load_missing_key() {
        let store = store_with(None);
        assert_eq!(store.load(), ResponseLedger::default());
        assert_eq!(store.counts(), Counts { yes: 0, no: 0 });
    }

    #[test]
    fn test_load_non_json() {
        let store = store_with(Some("definitely { not json"));
        assert_eq!(store.load(), ResponseLedger::default());
    }

    #[test]
    fn test_load_wrong_shape() {
        let store = store_with(Some(r#"{"yes": 3, "no": "x"}"#));
        assert_eq!(store.load(), ResponseLedger::default());
    }

    #[test]
    fn test_first_yes() {
        let mut store = store_with(None);
        let ledger = store.append(yes("Asha", "a@x.com")).unwrap();

        assert_eq!(ledger.accepted().next().map(|r| r.name.as_str()), Some("Asha"));
        assert_eq!(store.counts(), Counts { yes: 1, no: 0 });
        assert_eq!(store.load().accepted().next().map(|r| r.email.as_str()), Some("a@x.com"));
    }

    #[test]
    fn test_decline_onto_existing_ledger() {
        let seeded = r#"{
            "yes": [
                {"name":"A","email":"a@x.com","timestamp":"2026-01-01T00:00:00.000Z"},
                {"name":"B","email":"b@x.com","timestamp":"2026-01-02T00:00:00.000Z"},
                {"name":"C","email":"c@x.com","timestamp":"2026-01-03T00:00:00.000Z"}
            ],
            "no": [{"message":"busy","timestamp":"2026-01-04T00:00:00.000Z"}]
        }"#;
        let mut store = store_with(Some(seeded));
        let ledger = store.append(no("")).unwrap();

        assert_eq!(store.counts(), Counts { yes: 3, no: 2 });
        assert_eq!(ledger.declined().nth(1).map(|r| r.message.as_str()), Some(NO_MESSAGE_PLACEHOLDER));
        assert_eq!(store.load().declined().next().map(|r| r.message.as_str()), Some("busy"));
    }

    #[test]
    fn test_append_keeps_order() {
        let mut store = store_with(None);
        for name in ["first", "second", "third"] {
            store.append(yes(name, "x@y.z")).unwrap();
        }
        let before = store.load();
        let after = store.append(yes("fourth", "x@y.z")).unwrap();

        assert_eq!(after.yes.len(), before.yes.len() + 1);
        assert_eq!(&after.yes[..3], &before.yes[..]);
        assert_eq!(after.accepted().last().map(|r| r.name.as_str()), Some("fourth"));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut store = store_with(None);
        store.append(yes("Asha", "a@x.com")).unwrap();
        store.append(yes("Asha", "a@x.com")).unwrap();
        assert_eq!(store.counts().yes, 2);
    }

    #[test]
    fn test_append_keeps_entries_that_fail_to_parse() {
        let seeded = r#"{
            "yes": [
                {"name":"A","email":"a@x.com","timestamp":"2026-01-01T00:00:00.000Z"},
                {"name":"B","email":"b@x.com","timestamp":"2026-01-02T00:00:00.000Z"},
                {"name":"C","email":"c@x.com"}
            ],
            "no": []
        }"#;
        let mut store = store_with(Some(seeded));
        assert_eq!(store.counts(), Counts { yes: 3, no: 0 });

        store.append(yes("D", "d@x.com")).unwrap();

        let ledger = store.load();
        assert_eq!(ledger.counts(), Counts { yes: 4, no: 0 });
        let names: Vec<_> = ledger.accepted().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "D"]);
        assert_eq!(
            ledger.yes[2],
            LedgerEntry::Unreadable(serde_json::json!({"name": "C", "email": "c@x.com"}))
        );
    }

    #[test]
    fn test_append_over_garbage_starts_fresh() {
        let mut store = store_with(Some("[1,2,3]"));
        store.append(no("see you next year")).unwrap();
        assert_eq!(store.counts(), Counts { yes: 0, no: 1 });
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut store = ResponseStore::new(Box::new(ReadOnlyKv), DEFAULT_STORAGE_KEY);
        assert!(store.append(yes("Asha", "a@x.com")).is_err());
        assert_eq!(store.counts(), Counts::default());
    }

    #[test]
    fn test_file_backed_ledger_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let kv = FileKvStore::in_dir(dir.path());
            let mut store = ResponseStore::new(Box::new(kv), DEFAULT_STORAGE_KEY);
            store.append(yes("Asha", "a@x.com")).unwrap();
            store.append(no("")).unwrap();
        }
        let kv = FileKvStore::in_dir(dir.path());
        let store = ResponseStore::new(Box::new(kv), DEFAULT_STORAGE_KEY);
        assert_eq!(store.counts(), Counts { yes: 1, no: 1 });
    }
}

use crate::error::SchemaError;
use crate::evaluator::UnlockState;
use crate::record::{LockedRecord, RecordSchema};
use crate::store::{MemoryStore, TableSchema};
use std::collections::BTreeSet;
use std::io;
use std::sync::{Arc, Mutex};

pub(crate) const LOCKED_TESTERS: &str = "locked_attribute_testers";
pub(crate) const UNLOCKED_TESTERS: &str = "unlocked_attribute_testers";

/// A store with both tester tables provisioned and `test_always` /
/// `test_optional` declared locked on `locked_attribute_testers`.
pub(crate) fn create_tester_store() -> MemoryStore {
    let mut store = MemoryStore::new();

    store.create_table(TableSchema::new(UNLOCKED_TESTERS, ["test_unlocked"]));
    store.create_table(TableSchema::new(
        LOCKED_TESTERS,
        [
            "test_unlocked",
            "test_always",
            "test_optional",
            "test_optional_locked",
        ],
    ));

    store
        .declare_locked(LOCKED_TESTERS, &["test_always", "test_optional"])
        .unwrap();

    store
}

/// A fixed-schema type descriptor, or an unprovisioned one when `columns` is `None`.
pub(crate) struct FixedSchema {
    pub(crate) type_name: &'static str,
    pub(crate) columns: Option<Vec<&'static str>>,
}

impl FixedSchema {
    pub(crate) fn new(type_name: &'static str, columns: &[&'static str]) -> Self {
        Self {
            type_name,
            columns: Some(columns.to_vec()),
        }
    }

    pub(crate) fn missing(type_name: &'static str) -> Self {
        Self {
            type_name,
            columns: None,
        }
    }
}

impl RecordSchema for FixedSchema {
    fn type_name(&self) -> &str {
        self.type_name
    }

    fn column_names(&self) -> Result<Vec<String>, SchemaError> {
        self.columns
            .as_ref()
            .map(|columns| columns.iter().map(|c| c.to_string()).collect())
            .ok_or_else(|| SchemaError::TableMissing(self.type_name.to_string()))
    }
}

/// A hand-rolled record whose state tests set directly.
#[derive(Debug, Default)]
pub(crate) struct StubRecord {
    pub(crate) type_name: &'static str,
    pub(crate) new_record: bool,
    pub(crate) changed: BTreeSet<&'static str>,
    pub(crate) flags: Vec<(&'static str, bool)>,
    pub(crate) unlock: UnlockState,
}

impl StubRecord {
    /// A persisted record with no pending changes.
    pub(crate) fn persisted(type_name: &'static str) -> Self {
        Self {
            type_name,
            ..Self::default()
        }
    }

    pub(crate) fn with_changes(mut self, changed: &[&'static str]) -> Self {
        self.changed.extend(changed.iter().copied());
        self
    }

    pub(crate) fn with_flag(mut self, name: &'static str, value: bool) -> Self {
        self.flags.push((name, value));
        self
    }
}

impl LockedRecord for StubRecord {
    fn type_name(&self) -> &str {
        self.type_name
    }

    fn is_new_record(&self) -> bool {
        self.new_record
    }

    fn attribute_changed(&self, attribute: &str) -> bool {
        self.changed.contains(attribute)
    }

    fn boolean_attribute(&self, attribute: &str) -> Option<bool> {
        self.flags
            .iter()
            .find(|(name, _)| *name == attribute)
            .map(|(_, value)| *value)
    }

    fn unlock_state(&self) -> &UnlockState {
        &self.unlock
    }
}

/// Log output buffer shared with a test subscriber.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a thread-local subscriber and return everything it logged.
pub(crate) fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}

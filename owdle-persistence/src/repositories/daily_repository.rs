use owdle_core::DailyStateStore;
use owdle_types::DailyRecord;
use tracing::warn;

use crate::storage::KeyValueStore;

/// Daily progress stored as JSON strings in a key/value backend.
///
/// Storage failures never reach the game: a failed or unparseable read is a
/// miss and a failed write is dropped, both logged.
pub struct DailyStateRepository<K: KeyValueStore> {
    storage: K,
}

impl<K: KeyValueStore> DailyStateRepository<K> {
    pub fn new(storage: K) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &K {
        &self.storage
    }

    pub fn into_inner(self) -> K {
        self.storage
    }
}

impl<K: KeyValueStore> DailyStateStore for DailyStateRepository<K> {
    fn load(&self, key: &str) -> Option<DailyRecord> {
        let raw = match self.storage.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "Failed to read daily state");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(key, error = %e, "Ignoring malformed daily state");
                None
            }
        }
    }

    fn save(&mut self, key: &str, record: &DailyRecord) {
        let raw = match serde_json::to_string(record) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key, error = %e, "Failed to encode daily state");
                return;
            }
        };

        if let Err(e) = self.storage.set_item(key, &raw) {
            warn!(key, error = %e, "Failed to save daily state");
        }
    }
}

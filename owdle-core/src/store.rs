use std::collections::HashMap;

use owdle_types::{DailyRecord, GameVariant};

pub const DEFAULT_STORAGE_PREFIX: &str = "owdle-daily";

/// `"{prefix}-{variant}-{date_key}"`, one record per variant and calendar day.
pub fn daily_storage_key(prefix: &str, variant: GameVariant, date_key: &str) -> String {
    format!("{}-{}-{}", prefix, variant, date_key)
}

/// Where daily progress lives between page loads.
///
/// Neither call can fail from the caller's side: an unavailable or broken
/// backend reads as a miss and writes as a no-op.
pub trait DailyStateStore {
    fn load(&self, key: &str) -> Option<DailyRecord>;
    fn save(&mut self, key: &str, record: &DailyRecord);
}

impl<T: DailyStateStore + ?Sized> DailyStateStore for &mut T {
    fn load(&self, key: &str) -> Option<DailyRecord> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, record: &DailyRecord) {
        (**self).save(key, record)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDailyStore {
    records: HashMap<String, DailyRecord>,
}

impl MemoryDailyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&DailyRecord> {
        self.records.get(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl DailyStateStore for MemoryDailyStore {
    fn load(&self, key: &str) -> Option<DailyRecord> {
        self.records.get(key).cloned()
    }

    fn save(&mut self, key: &str, record: &DailyRecord) {
        self.records.insert(key.to_string(), record.clone());
    }
}

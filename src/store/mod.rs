//! The persisted-collection pattern shared by every tracker: one uniquely
//! named slot in a local key-value store holds the whole collection as a
//! JSON array, newest first, bounded, and fully replaced on every mutation.

mod memory;

pub use memory::MemorySlots;

use std::marker::PhantomData;

use anyhow::{Context, Result};
use log::warn;

use crate::models::LogRecord;

/// Key-value boundary to durable storage. Kept deliberately small so the
/// backend can be swapped without touching the trackers.
pub trait Slots {
    fn read_slot(&self, key: &str) -> Result<Option<String>>;
    fn write_slot(&self, key: &str, value: &str) -> Result<()>;
    fn clear_slot(&self, key: &str) -> Result<()>;
}

/// Records retained per collection unless a store overrides it.
pub const DEFAULT_RETENTION: usize = 30;

pub struct CollectionStore<S: Slots, R: LogRecord> {
    slots: S,
    key: &'static str,
    max_entries: usize,
    _record: PhantomData<fn() -> R>,
}

impl<S: Slots, R: LogRecord> CollectionStore<S, R> {
    pub fn new(slots: S, key: &'static str) -> Self {
        Self::bounded(slots, key, DEFAULT_RETENTION)
    }

    pub fn bounded(slots: S, key: &'static str, max_entries: usize) -> Self {
        Self {
            slots,
            key,
            max_entries,
            _record: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Loads the collection. A missing slot is an empty collection; an
    /// unreadable or unparseable one is discarded (logged, slot cleared),
    /// never an error to the caller.
    pub fn load(&self) -> Vec<R> {
        let raw = match self.slots.read_slot(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("failed to read slot {}: {err:#}", self.key);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                warn!("slot {} holds unparseable data, discarding it: {err}", self.key);
                if let Err(clear_err) = self.slots.clear_slot(self.key) {
                    warn!("failed to clear corrupt slot {}: {clear_err:#}", self.key);
                }
                Vec::new()
            }
        }
    }

    /// Prepends a record (newest first), truncates to the retention bound
    /// and writes the whole collection back in a single slot write.
    pub fn append(&self, record: R) -> Result<Vec<R>> {
        let (records, _) = self.push(record)?;
        Ok(records)
    }

    /// Like [`append`](Self::append), but returns the records the retention
    /// bound pushed out, so a caller maintaining an aggregate over the
    /// collection can compensate for them.
    pub fn append_evicting(&self, record: R) -> Result<Vec<R>> {
        let (_, evicted) = self.push(record)?;
        Ok(evicted)
    }

    fn push(&self, record: R) -> Result<(Vec<R>, Vec<R>)> {
        debug_assert!(!record.id().is_empty(), "record identity must be assigned");
        let mut records = self.load();
        records.insert(0, record);
        let evicted = records.split_off(self.max_entries.min(records.len()));
        self.persist(&records)?;
        Ok((records, evicted))
    }

    /// Removes the record with the given id. Returns whether one existed.
    pub fn remove(&self, id: &str) -> Result<bool> {
        let mut records = self.load();
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            return Ok(false);
        }
        self.persist(&records)?;
        Ok(true)
    }

    /// Applies `mutator` to the one matching record and writes back.
    /// Returns whether a record matched.
    pub fn update(&self, id: &str, mutator: impl FnOnce(&mut R)) -> Result<bool> {
        let mut records = self.load();
        match records.iter_mut().find(|record| record.id() == id) {
            Some(record) => mutator(record),
            None => return Ok(false),
        }
        self.persist(&records)?;
        Ok(true)
    }

    /// Replaces the whole collection; used by cascading deletes.
    pub fn replace(&self, mut records: Vec<R>) -> Result<Vec<R>> {
        records.truncate(self.max_entries);
        self.persist(&records)?;
        Ok(records)
    }

    fn persist(&self, records: &[R]) -> Result<()> {
        let serialized = serde_json::to_string(records)
            .with_context(|| format!("failed to serialize slot {}", self.key))?;
        self.slots.write_slot(self.key, &serialized)
    }
}

//! Persistent Store Adapter
//!
//! Serializes the checklist state into a single string record of a
//! string-keyed store (the browser's `localStorage` in production).

use std::collections::HashMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::state::ChecklistState;

/// Current schema version of the persisted record
pub const RECORD_VERSION: u32 = 1;

/// Minimal string-keyed, string-valued store
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Versioned on-disk shape: `{"version":1,"items":{...}}`
#[derive(Debug, Serialize, Deserialize)]
struct PersistedRecord {
    version: u32,
    items: HashMap<String, bool>,
}

/// Either the versioned envelope or the legacy flat `{id: bool}` object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredRecord {
    Versioned(PersistedRecord),
    Legacy(HashMap<String, bool>),
}

/// Decode a stored record. Malformed input yields `None`.
pub fn decode_record(raw: &str) -> Option<HashMap<String, bool>> {
    match serde_json::from_str::<StoredRecord>(raw) {
        Ok(StoredRecord::Versioned(record)) if record.version <= RECORD_VERSION => Some(record.items),
        Ok(StoredRecord::Versioned(record)) => {
            warn!("ignoring checklist record with unsupported version {}", record.version);
            None
        }
        Ok(StoredRecord::Legacy(items)) => Some(items),
        Err(e) => {
            warn!("ignoring malformed checklist record: {}", e);
            None
        }
    }
}

/// Encode the full state as a versioned record
pub fn encode_record(state: &ChecklistState) -> Result<String, StoreError> {
    let record = PersistedRecord {
        version: RECORD_VERSION,
        items: state.snapshot(),
    };
    Ok(serde_json::to_string(&record)?)
}

/// Reads and writes the checklist record under a fixed key
#[derive(Debug)]
pub struct StoreAdapter<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> StoreAdapter<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Write the full mapping under the record key
    pub fn save(&mut self, state: &ChecklistState) -> Result<(), StoreError> {
        let raw = encode_record(state)?;
        self.store.set_item(&self.key, &raw)?;
        debug!("saved checklist record ({} bytes)", raw.len());
        Ok(())
    }

    /// Read the record back. Never fails: absence, read errors and parse
    /// errors all come back as `None`.
    pub fn load(&self) -> Option<HashMap<String, bool>> {
        match self.store.get_item(&self.key) {
            Ok(Some(raw)) => decode_record(&raw),
            Ok(None) => None,
            Err(e) => {
                warn!("could not read checklist record: {}", e);
                None
            }
        }
    }

    /// Remove the record entirely
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.store.remove_item(&self.key)
    }
}

/// In-memory store, also able to pretend storage is disabled
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects every operation with `StoreError::Unavailable`
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_record(mut self, key: &str, value: &str) -> Self {
        self.records.insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.records.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable);
        }
        Ok(self.records.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable);
        }
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable);
        }
        self.records.remove(key);
        Ok(())
    }
}

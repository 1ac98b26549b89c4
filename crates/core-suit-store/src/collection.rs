//! Whole-collection persistence over one storage key.
//!
//! The collection is stored as a single JSON array. There is no partial
//! update at this layer: callers load the full sequence, change their copy,
//! and save the full sequence back.

use tracing::{debug, warn};

use core_suit_model::{Collection, Record};

use crate::error::Result;
use crate::traits::Backend;

/// Storage key of the suit collection.
pub const DEFAULT_COLLECTION_KEY: &str = "core_suit_list";

/// Decode a stored payload. An empty or whitespace-only payload is an
/// empty collection.
pub fn decode_collection(payload: &str) -> serde_json::Result<Collection> {
    if payload.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(payload)
}

/// Encode a collection as its stored payload.
pub fn encode_collection(records: &[Record]) -> serde_json::Result<String> {
    serde_json::to_string(records)
}

/// One named collection of records inside a [`Backend`].
pub struct CollectionStore<B: Backend> {
    backend: B,
    key: String,
}

impl<B: Backend> CollectionStore<B> {
    /// Create a store for the collection under `key`.
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Create a store for [`DEFAULT_COLLECTION_KEY`].
    pub fn with_default_key(backend: B) -> Self {
        Self::new(backend, DEFAULT_COLLECTION_KEY)
    }

    /// The storage key this store is scoped to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the backend reference.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load the persisted collection.
    ///
    /// Returns an empty collection when nothing is stored, when the backend
    /// read fails, or when the payload does not decode as an array of
    /// records. These cases are logged, never returned.
    pub fn load_all(&self) -> Collection {
        let payload = match self.backend.get(&self.key) {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "collection read failed, loading as empty");
                return Vec::new();
            }
        };

        match decode_collection(&payload) {
            Ok(records) => {
                debug!(key = %self.key, len = records.len(), "loaded collection");
                records
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "stored collection is corrupt, loading as empty");
                Vec::new()
            }
        }
    }

    /// Persist `records` as the entire collection, replacing the prior value.
    ///
    /// Backend failures propagate to the caller; nothing is retried.
    pub fn save_all(&self, records: &[Record]) -> Result<()> {
        let payload = encode_collection(records)?;
        self.backend.set(&self.key, &payload)?;
        debug!(key = %self.key, len = records.len(), "saved collection");
        Ok(())
    }
}

//! # CORE Suit Store
//!
//! Storage for the CORE suit registry. A [`Backend`] is a synchronous
//! key-value store; a [`CollectionStore`] keeps one named collection of
//! records inside a backend as a single serialized value.
//!
//! ## Key Types
//!
//! - [`Backend`] - The trait for key-value storage
//! - [`SqliteBackend`] - SQLite-based durable storage
//! - [`MemoryBackend`] - In-memory storage for tests and embedding
//! - [`FailingBackend`] - Wrapper that injects failures
//! - [`CollectionStore`] - Load-all / save-all over one storage key
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core_suit_store::{CollectionStore, SqliteBackend};
//! use core_suit_model::Record;
//!
//! let backend = SqliteBackend::open("registry.db").unwrap();
//! let store = CollectionStore::with_default_key(backend);
//!
//! let mut records = store.load_all();
//! records.push(Record::builder("Suit A", "SA1").build());
//! store.save_all(&records).unwrap();
//! ```
//!
//! ## Design Notes
//!
//! - **Whole-value writes**: there is no append or update-at primitive. Every
//!   change is load, mutate in memory, save.
//! - **Reads never fail**: a missing, unreadable, or corrupt payload loads as
//!   an empty collection and is logged.
//! - **Writes propagate**: a failed write is returned to the caller as-is.

pub mod collection;
pub mod error;
pub mod failing;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use collection::{decode_collection, encode_collection, CollectionStore, DEFAULT_COLLECTION_KEY};
pub use error::{Result, StoreError};
pub use failing::{FailingBackend, FailurePolicy};
pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;
pub use traits::Backend;

//! # CORE Suit Testkit
//!
//! Testing utilities for the CORE suit registry.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: stored payloads with the collection they must load as
//! - **Generators**: Proptest strategies for records and staged forms
//! - **Fixtures**: an editor over shared in-memory storage, plus sample records
//!
//! ## Golden Vectors
//!
//! ```rust
//! use core_suit_testkit::vectors::{all_vectors, verify_all_vectors};
//!
//! for (name, ok) in verify_all_vectors() {
//!     assert!(ok, "{name}");
//! }
//! assert!(!all_vectors().is_empty());
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use core_suit_testkit::generators::{collection, valid_form};
//!
//! proptest! {
//!     #[test]
//!     fn submit_appends(records in collection(8), form in valid_form()) {
//!         // ...
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use core_suit_testkit::fixtures::{suit_a, TestFixture};
//!
//! let mut fixture = TestFixture::new();
//! fixture.add(&suit_a()).unwrap();
//! assert_eq!(fixture.stored(), vec![suit_a()]);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{sample_records, suit_a, ScriptedConfirm, TestFixture};
pub use generators::{form_from_params, FormParams};
pub use vectors::{all_vectors, verify_all_vectors, StorageVector};

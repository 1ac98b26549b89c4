//! # CORE Suit Model
//!
//! Pure types for the CORE suit registry: equipment records, the staged
//! form, validation, and markup escaping.
//!
//! This crate contains no I/O, no storage, no rendering state. It is pure
//! computation over the record data model.
//!
//! ## Key Types
//!
//! - [`Record`] - One equipment entry with five textual fields
//! - [`Field`] - Discriminator for the five form inputs
//! - [`FormFields`] - The values staged in the form before submission
//! - [`Collection`] - The full ordered sequence of records
//!
//! ## Storage Form
//!
//! Records serialize with the field names `nama`, `kode`, `unit`, `ukuran`,
//! `tahun` so that payloads stay interchangeable with existing stored data.
//! See [`record`] for the lenient decoding rules.

pub mod error;
pub mod escape;
pub mod field;
pub mod form;
pub mod record;
pub mod validation;

pub use error::{ModelError, ValidationError};
pub use escape::escape_html;
pub use field::Field;
pub use form::FormFields;
pub use record::{Collection, Record, RecordBuilder};
pub use validation::{missing_required, validate_form};

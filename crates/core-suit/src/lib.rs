//! # CORE Suit
//!
//! The registry of conductive suits: a record list kept in a single storage
//! slot, edited through one modal form.
//!
//! ## Overview
//!
//! - **Records**: five free-text fields; `name` and `code` are required
//! - **Store**: the whole collection is read and written as one JSON array
//! - **Editor**: a create/edit state machine over a staged form
//! - **Render**: rows rebuilt from the store after every mutation
//!
//! ## Key Concepts
//!
//! - **Positional identity**: a record is addressed by its index. Indices
//!   are valid only until the next mutation, so the editor re-renders
//!   before returning from every operation.
//! - **Edit(i)**: the editor mode in which a submit replaces record `i`.
//! - **Confirmation gate**: a delete touches nothing until confirmed.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core_suit::{Editor, EditorConfig, Field};
//! use core_suit::store::SqliteBackend;
//!
//! fn example() -> core_suit::Result<()> {
//!     let backend = SqliteBackend::open("suits.db")?;
//!     let mut editor = Editor::open(backend, EditorConfig::default());
//!
//!     editor.open_add();
//!     editor.set_field(Field::Name, "Suit A");
//!     editor.set_field(Field::Code, "SA1");
//!     editor.submit()?;
//!
//!     editor.delete(0, &mut |prompt: &str| {
//!         println!("{prompt}");
//!         true
//!     })?;
//!     Ok(())
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `core_suit::model` - Records, fields, validation, escaping
//! - `core_suit::store` - Storage backends and the collection store
//! - `core_suit::host` - Auth guard and navigation loader

pub mod config;
pub mod editor;
pub mod error;
pub mod page;
pub mod render;
pub mod state;

// Re-export component crates
pub use core_suit_host as host;
pub use core_suit_model as model;
pub use core_suit_store as store;

// Re-export main types for convenience
pub use config::EditorConfig;
pub use editor::{ClickTarget, Confirm, DeleteOutcome, EditOutcome, Editor, SubmitOutcome};
pub use error::{EditorError, Result};
pub use page::{boot, Page, PageLoad};
pub use render::{column_headings, render, render_table_body, RowView};
pub use state::{EditorState, Modal, Mode, Notice, NoticeLevel};

// Re-export commonly used model types
pub use core_suit_model::{Collection, Field, FormFields, Record, ValidationError};

//! The Editor: the controller behind the record form.
//!
//! The editor owns one [`EditorState`] and translates user intent (open,
//! fill, submit, cancel, delete) into whole-collection store operations. It
//! never holds the collection itself; every operation takes a fresh
//! snapshot from the store, changes it, writes it back, and re-renders.

use std::cmp::Ordering;

use tracing::{debug, info, warn};

use core_suit_model::{Field, FormFields, Record};
use core_suit_store::{Backend, CollectionStore};

use crate::config::EditorConfig;
use crate::error::{EditorError, Result};
use crate::render::{render, RowView};
use crate::state::{EditorState, Modal, Mode, Notice};

/// Yes/no gate in front of destructive actions.
pub trait Confirm {
    /// Ask `prompt`; true means go ahead.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// What was clicked when a click reached the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed background around the form.
    Overlay,
    /// Anything inside the form.
    Content,
}

/// Result of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A record was appended at `index`.
    Created { index: usize },
    /// The record at `index` was replaced.
    Updated { index: usize },
    /// The edit target no longer exists; nothing was written and the form
    /// is now in create mode.
    Stale { index: usize },
}

/// Result of opening a row for editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Opened { index: usize },
    /// No such row; nothing changed.
    Stale { index: usize },
}

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record formerly at `index` was removed.
    Deleted { index: usize, record: Record },
    /// The user declined; nothing changed.
    Declined,
    /// No such row; nothing changed.
    Stale { index: usize },
}

/// The record editor.
///
/// Provides:
/// - Create and edit through a single staged form
/// - Confirmation-gated delete
/// - A row list kept in step with the store after every mutation
pub struct Editor<B: Backend> {
    store: CollectionStore<B>,
    config: EditorConfig,
    state: EditorState,
    rows: Vec<RowView>,
    notice: Option<Notice>,
}

impl<B: Backend> Editor<B> {
    /// Create an editor over the collection at `config.storage_key`.
    pub fn open(backend: B, config: EditorConfig) -> Self {
        let store = CollectionStore::new(backend, config.storage_key.clone());
        Self::new(store, config)
    }

    /// Create an editor over an existing collection store and render it.
    pub fn new(store: CollectionStore<B>, config: EditorConfig) -> Self {
        let mut editor = Self {
            store,
            config,
            state: EditorState::new(),
            rows: Vec::new(),
            notice: None,
        };
        editor.refresh();
        editor
    }

    /// Get the store reference.
    pub fn store(&self) -> &CollectionStore<B> {
        &self.store
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn form(&self) -> &FormFields {
        &self.state.form
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Rows of the most recent render.
    pub fn rows(&self) -> &[RowView] {
        &self.rows
    }

    /// Message from the last operation, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Take the message from the last operation, clearing it.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Modal title for the current mode.
    pub fn modal_title(&self) -> &str {
        match self.state.mode {
            Mode::Create => &self.config.create_title,
            Mode::Edit(_) => &self.config.edit_title,
        }
    }

    /// Submit button label for the current mode.
    pub fn submit_label(&self) -> &str {
        match self.state.mode {
            Mode::Create => &self.config.create_submit_label,
            Mode::Edit(_) => &self.config.edit_submit_label,
        }
    }

    /// Rebuild the rows from the current store contents.
    pub fn refresh(&mut self) -> &[RowView] {
        self.rows = render(&self.store.load_all());
        &self.rows
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Form
    // ─────────────────────────────────────────────────────────────────────────

    /// Open an empty form in create mode.
    ///
    /// Does nothing if the form is already open.
    pub fn open_add(&mut self) {
        if self.state.is_open() {
            debug!(mode = ?self.state.mode, "form already open");
            return;
        }
        self.state.reset();
        self.state.modal = Modal::Open;
        debug!("opened form in create mode");
    }

    /// Open the form on row `index` in edit mode.
    pub fn open_edit(&mut self, index: usize) -> EditOutcome {
        if index >= self.rows.len() {
            return self.stale_edit(index);
        }

        let records = self.store.load_all();
        let Some(record) = records.get(index) else {
            self.rows = render(&records);
            return self.stale_edit(index);
        };

        self.state.form = FormFields::from(record);
        self.state.mode = Mode::Edit(index);
        self.state.modal = Modal::Open;
        debug!(index, "opened form in edit mode");
        EditOutcome::Opened { index }
    }

    /// Stage `value` for one input. Ignored while the form is closed.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if !self.state.is_open() {
            debug!(%field, "form closed, ignoring input");
            return;
        }
        self.state.form.set(field, value);
    }

    /// Empty the staged inputs. Mode and visibility are unchanged.
    pub fn clear_form(&mut self) {
        self.state.form.clear();
    }

    /// Validate the form and persist it.
    ///
    /// In create mode the record is appended; in edit mode it replaces the
    /// target in place. On success the form closes and the editor returns to
    /// create mode. A validation failure leaves the form open and populated.
    /// If the edit target no longer exists, nothing is written and the form
    /// stays open in create mode with its values.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        if !self.state.is_open() {
            warn!("submit while form is closed");
            return Err(EditorError::ModalClosed);
        }

        let record = match self.state.form.validate() {
            Ok(record) => record,
            Err(e) => {
                debug!(error = %e, "submit rejected");
                self.notice = Some(Notice::error(self.config.required_message.clone()));
                return Err(e.into());
            }
        };

        let mut records = self.store.load_all();
        let outcome = match self.state.mode {
            Mode::Create => {
                records.push(record);
                SubmitOutcome::Created {
                    index: records.len() - 1,
                }
            }
            Mode::Edit(index) => match records.get_mut(index) {
                Some(slot) => {
                    *slot = record;
                    SubmitOutcome::Updated { index }
                }
                None => {
                    warn!(index, len = records.len(), "edit target no longer exists");
                    self.rows = render(&records);
                    self.notice = Some(Notice::error(self.config.stale_message.clone()));
                    self.state.mode = Mode::Create;
                    return Ok(SubmitOutcome::Stale { index });
                }
            },
        };

        if let Err(e) = self.store.save_all(&records) {
            self.refresh();
            self.notice = Some(Notice::error(e.to_string()));
            return Err(e.into());
        }
        self.rows = render(&records);

        let message = match outcome {
            SubmitOutcome::Updated { .. } => &self.config.updated_message,
            _ => &self.config.saved_message,
        };
        self.notice = Some(Notice::info(message.clone()));
        self.state.reset();
        info!(?outcome, len = records.len(), "record persisted");
        Ok(outcome)
    }

    /// Discard the form and close it.
    pub fn cancel(&mut self) {
        self.close();
    }

    /// Close the form, discarding staged values and returning to create mode.
    pub fn close(&mut self) {
        if self.state.is_open() {
            debug!(mode = ?self.state.mode, "closed form");
        }
        self.state.reset();
    }

    /// Handle a click on the modal. Only a click on the overlay closes it.
    ///
    /// Returns true if the form was closed.
    pub fn dismiss(&mut self, target: ClickTarget) -> bool {
        if target != ClickTarget::Overlay || !self.state.is_open() {
            return false;
        }
        self.close();
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rows
    // ─────────────────────────────────────────────────────────────────────────

    /// Delete row `index` once `confirm` agrees.
    ///
    /// The store is not touched unless the user confirms. An open edit keeps
    /// following its record: a target below the deleted row moves up by one,
    /// and a deleted target turns the staged form into a new record.
    pub fn delete<C: Confirm + ?Sized>(
        &mut self,
        index: usize,
        confirm: &mut C,
    ) -> Result<DeleteOutcome> {
        if index >= self.rows.len() {
            return Ok(self.stale_delete(index));
        }

        if !confirm.confirm(&self.config.delete_prompt) {
            debug!(index, "delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        let mut records = self.store.load_all();
        if index >= records.len() {
            self.rows = render(&records);
            return Ok(self.stale_delete(index));
        }
        let record = records.remove(index);

        if let Err(e) = self.store.save_all(&records) {
            self.refresh();
            self.notice = Some(Notice::error(e.to_string()));
            return Err(e.into());
        }
        self.rows = render(&records);
        self.retarget_after_delete(index);

        self.notice = Some(Notice::info(self.config.deleted_message.clone()));
        info!(index, len = records.len(), "record deleted");
        Ok(DeleteOutcome::Deleted { index, record })
    }

    fn retarget_after_delete(&mut self, deleted: usize) {
        let Mode::Edit(target) = self.state.mode else {
            return;
        };
        self.state.mode = match deleted.cmp(&target) {
            Ordering::Less => Mode::Edit(target - 1),
            Ordering::Equal => Mode::Create,
            Ordering::Greater => return,
        };
        debug!(deleted, target, mode = ?self.state.mode, "edit target moved");
    }

    fn stale_edit(&mut self, index: usize) -> EditOutcome {
        warn!(index, rows = self.rows.len(), "edit requested for missing row");
        self.notice = Some(Notice::error(self.config.stale_message.clone()));
        EditOutcome::Stale { index }
    }

    fn stale_delete(&mut self, index: usize) -> DeleteOutcome {
        warn!(index, rows = self.rows.len(), "delete requested for missing row");
        self.notice = Some(Notice::error(self.config.stale_message.clone()));
        DeleteOutcome::Stale { index }
    }
}

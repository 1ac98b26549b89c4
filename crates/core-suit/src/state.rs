//! Transient editor state. Never persisted.

use core_suit_model::FormFields;

/// Whether a submit creates a record or replaces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Create,
    /// Replace the record at this index of the collection.
    Edit(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    Open,
    #[default]
    Closed,
}

/// Mode, staged form, and modal visibility of one editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    pub mode: Mode,
    pub form: FormFields,
    pub modal: Modal,
}

impl EditorState {
    /// Fresh state: create mode, empty form, modal closed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.modal == Modal::Open
    }

    /// The index being edited, if in edit mode.
    pub fn editing_index(&self) -> Option<usize> {
        match self.mode {
            Mode::Edit(index) => Some(index),
            Mode::Create => None,
        }
    }

    /// Back to the fresh state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Transient message for the user about the last operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

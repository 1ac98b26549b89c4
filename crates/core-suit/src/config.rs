//! Editor configuration: storage key and user-facing text.

use serde::{Deserialize, Serialize};

use core_suit_store::DEFAULT_COLLECTION_KEY;

use crate::error::Result;

/// Configuration for the [`Editor`](crate::Editor).
///
/// Every field has a default, so a partial JSON document is enough to
/// override a single label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Storage key of the collection.
    pub storage_key: String,
    /// Modal title in create mode.
    pub create_title: String,
    /// Modal title in edit mode.
    pub edit_title: String,
    /// Submit button label in create mode.
    pub create_submit_label: String,
    /// Submit button label in edit mode.
    pub edit_submit_label: String,
    /// Question asked before a delete.
    pub delete_prompt: String,
    /// Shown when a required field is empty.
    pub required_message: String,
    pub saved_message: String,
    pub updated_message: String,
    pub deleted_message: String,
    /// Shown when a row action targets a record that no longer exists.
    pub stale_message: String,
}

impl EditorConfig {
    /// Parse a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_COLLECTION_KEY.to_string(),
            create_title: "Add Conductive Suit".to_string(),
            edit_title: "Edit Conductive Suit".to_string(),
            create_submit_label: "Save".to_string(),
            edit_submit_label: "Update".to_string(),
            delete_prompt: "Delete this entry?".to_string(),
            required_message: "Name and Code are required".to_string(),
            saved_message: "Record saved".to_string(),
            updated_message: "Record updated".to_string(),
            deleted_message: "Record deleted".to_string(),
            stale_message: "That record no longer exists".to_string(),
        }
    }
}

//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::collections::VecDeque;
use std::sync::Arc;

use core_suit::{Confirm, Editor, EditorConfig, Field, SubmitOutcome};
use core_suit_model::{Collection, Record};
use core_suit_store::{Backend, CollectionStore, MemoryBackend, DEFAULT_COLLECTION_KEY};

/// An editor over in-memory storage, with the storage kept reachable.
pub struct TestFixture {
    pub backend: Arc<MemoryBackend>,
    pub editor: Editor<Arc<MemoryBackend>>,
}

impl TestFixture {
    /// Create a fixture over empty storage with the default config.
    pub fn new() -> Self {
        Self::with_records(&[])
    }

    /// Create a fixture whose storage already holds `records`.
    pub fn with_records(records: &[Record]) -> Self {
        let backend = Arc::new(MemoryBackend::new());
        CollectionStore::with_default_key(Arc::clone(&backend))
            .save_all(records)
            .expect("seed collection");
        let editor = Editor::open(Arc::clone(&backend), EditorConfig::default());
        Self { backend, editor }
    }

    /// Add `record` through the form, as a user would.
    pub fn add(&mut self, record: &Record) -> core_suit::Result<SubmitOutcome> {
        self.editor.close();
        self.editor.open_add();
        self.fill(record);
        self.editor.submit()
    }

    /// Stage every field of `record` into the open form.
    pub fn fill(&mut self, record: &Record) {
        for field in Field::ALL {
            self.editor.set_field(field, record.get(field));
        }
    }

    /// The collection as currently stored.
    pub fn stored(&self) -> Collection {
        self.editor.store().load_all()
    }

    /// The raw stored payload.
    pub fn raw(&self) -> Option<String> {
        self.backend
            .get(DEFAULT_COLLECTION_KEY)
            .expect("memory backend read")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Confirmation gate that answers from a script and records every prompt.
///
/// Once the script runs out, every further prompt is declined.
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    answers: VecDeque<bool>,
    pub prompts: Vec<String>,
}

impl ScriptedConfirm {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    pub fn accept() -> Self {
        Self::new([true])
    }

    pub fn decline() -> Self {
        Self::new([false])
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}

/// The record used in walkthroughs: Suit A / SA1 / U1 / M / 2024.
pub fn suit_a() -> Record {
    Record::builder("Suit A", "SA1")
        .unit("U1")
        .size("M")
        .year("2024")
        .build()
}

/// A handful of distinct records.
pub fn sample_records(count: usize) -> Vec<Record> {
    const SIZES: [&str; 4] = ["S", "M", "L", "XL"];
    (0..count)
        .map(|i| {
            Record::builder(format!("Suit {}", i + 1), format!("CS-{:03}", i + 1))
                .unit(format!("Unit {}", i % 3 + 1))
                .size(SIZES[i % SIZES.len()])
                .year((2020 + i % 5).to_string())
                .build()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_suit::DeleteOutcome;

    #[test]
    fn test_fixture_add() {
        let mut fixture = TestFixture::new();
        assert_eq!(fixture.raw(), Some("[]".to_string()));

        let outcome = fixture.add(&suit_a()).unwrap();
        assert_eq!(outcome, SubmitOutcome::Created { index: 0 });
        assert_eq!(fixture.stored(), vec![suit_a()]);
    }

    #[test]
    fn test_fixture_with_records() {
        let fixture = TestFixture::with_records(&sample_records(3));
        assert_eq!(fixture.editor.rows().len(), 3);
        assert_eq!(fixture.stored()[2].code, "CS-003");
    }

    #[test]
    fn test_scripted_confirm() {
        let mut fixture = TestFixture::with_records(&sample_records(2));
        let mut confirm = ScriptedConfirm::new([false, true]);

        let first = fixture.editor.delete(0, &mut confirm).unwrap();
        let second = fixture.editor.delete(0, &mut confirm).unwrap();
        let third = fixture.editor.delete(0, &mut confirm).unwrap();

        assert_eq!(first, DeleteOutcome::Declined);
        assert!(matches!(second, DeleteOutcome::Deleted { index: 0, .. }));
        assert_eq!(third, DeleteOutcome::Declined);
        assert_eq!(confirm.prompts.len(), 3);
        assert_eq!(fixture.stored().len(), 1);
    }

    #[test]
    fn test_sample_records_are_distinct() {
        let records = sample_records(10);
        for (i, a) in records.iter().enumerate() {
            assert!(records[i + 1..].iter().all(|b| a != b));
        }
    }
}

//! The values staged in the input form before submission.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::field::Field;
use crate::record::Record;
use crate::validation::validate_form;

/// The five inputs of the form, held verbatim.
///
/// Values are never trimmed while staged; trimming happens once, at
/// submission, inside [`FormFields::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub code: String,
    pub unit: String,
    pub size: String,
    pub year: String,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Code => &self.code,
            Field::Unit => &self.unit,
            Field::Size => &self.size,
            Field::Year => &self.year,
        }
    }

    /// Stage a value for one input.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Code => &mut self.code,
            Field::Unit => &mut self.unit,
            Field::Size => &mut self.size,
            Field::Year => &mut self.year,
        };
        *slot = value.into();
    }

    /// Builder-style variant of [`FormFields::set`].
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Empty every input.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True if every input is the empty string.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|&f| self.get(f).is_empty())
    }

    /// Trim and validate, producing the record to persist.
    pub fn validate(&self) -> Result<Record, ValidationError> {
        validate_form(self)
    }
}

impl From<&Record> for FormFields {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            code: record.code.clone(),
            unit: record.unit.clone(),
            size: record.size.clone(),
            year: record.year.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut form = FormFields::new();
        form.set(Field::Unit, " U1 ");
        assert_eq!(form.get(Field::Unit), " U1 ");
        assert!(!form.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut form = FormFields::new().with(Field::Name, "Suit A").with(Field::Year, "2024");
        form.clear();
        assert!(form.is_empty());
    }

    #[test]
    fn test_copy_from_record() {
        let record = Record::builder("Suit A", "SA1").size("M").build();
        let form = FormFields::from(&record);
        assert_eq!(form.name, "Suit A");
        assert_eq!(form.size, "M");
        assert_eq!(form.validate().unwrap(), record);
    }
}

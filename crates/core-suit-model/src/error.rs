//! Error types for the CORE suit model.

use thiserror::Error;

use crate::field::Field;

/// Errors raised while interpreting model values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
}

/// Validation errors for a staged form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields are empty after trimming.
    #[error("required fields missing: {}", join_fields(.0))]
    MissingFields(Vec<Field>),
}

impl ValidationError {
    /// The fields that failed validation.
    pub fn fields(&self) -> &[Field] {
        match self {
            ValidationError::MissingFields(fields) => fields,
        }
    }
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ")
}

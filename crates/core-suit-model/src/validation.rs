//! Form validation: required-field checks and trimming.

use crate::error::ValidationError;
use crate::field::Field;
use crate::form::FormFields;
use crate::record::Record;

/// Required fields that are empty after trimming, in column order.
pub fn missing_required(form: &FormFields) -> Vec<Field> {
    Field::REQUIRED
        .into_iter()
        .filter(|&f| form.get(f).trim().is_empty())
        .collect()
}

/// Validate a staged form and build the record it describes.
///
/// Every field is trimmed. Only `name` and `code` are required; the other
/// fields may be empty.
pub fn validate_form(form: &FormFields) -> Result<Record, ValidationError> {
    let missing = missing_required(form);
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    Ok(Record {
        name: form.name.trim().to_string(),
        code: form.code.trim().to_string(),
        unit: form.unit.trim().to_string(),
        size: form.size.trim().to_string(),
        year: form.year.trim().to_string(),
    })
}

//! The five form inputs of a record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// One of the five textual inputs of a record.
///
/// Each field carries a stable element identifier (the id of its input in
/// the form, also the key it is stored under) and a display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Code,
    Unit,
    Size,
    Year,
}

impl Field {
    /// All fields, in form and column order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Code,
        Field::Unit,
        Field::Size,
        Field::Year,
    ];

    /// Fields that must be non-empty after trimming.
    pub const REQUIRED: [Field; 2] = [Field::Name, Field::Code];

    /// Stable element identifier of the input, also the storage key.
    pub const fn element_id(self) -> &'static str {
        match self {
            Field::Name => "nama",
            Field::Code => "kode",
            Field::Unit => "unit",
            Field::Size => "ukuran",
            Field::Year => "tahun",
        }
    }

    /// Lowercase identifier used in messages and logs.
    pub const fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Code => "code",
            Field::Unit => "unit",
            Field::Size => "size",
            Field::Year => "year",
        }
    }

    /// Column heading / input label.
    pub const fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Code => "Code",
            Field::Unit => "Unit",
            Field::Size => "Size",
            Field::Year => "Year",
        }
    }

    pub const fn is_required(self) -> bool {
        matches!(self, Field::Name | Field::Code)
    }

    /// Look up a field by its element identifier.
    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.element_id() == id)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Accepts either the lowercase key (`size`) or the element id (`ukuran`).
impl FromStr for Field {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .or_else(|| Self::from_element_id(s))
            .ok_or_else(|| ModelError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_ids_are_unique() {
        let mut ids: Vec<_> = Field::ALL.iter().map(|f| f.element_id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Field::ALL.len());
    }

    #[test]
    fn test_required_fields() {
        let required: Vec<_> = Field::ALL.into_iter().filter(|f| f.is_required()).collect();
        assert_eq!(required, Field::REQUIRED.to_vec());
    }

    #[test]
    fn test_parse_key_and_element_id() {
        assert_eq!("size".parse::<Field>().unwrap(), Field::Size);
        assert_eq!("ukuran".parse::<Field>().unwrap(), Field::Size);
        assert_eq!("tahun".parse::<Field>().unwrap(), Field::Year);
        assert!(matches!(
            "colour".parse::<Field>(),
            Err(ModelError::UnknownField(s)) if s == "colour"
        ));
    }
}

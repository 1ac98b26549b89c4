//! Record: one equipment entry.
//!
//! Records have no identity field. Identity is the position of the record
//! inside its [`Collection`], so an index is only meaningful until the next
//! mutation of that collection.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::field::Field;

/// The full ordered sequence of records. Order is insertion order.
pub type Collection = Vec<Record>;

/// One equipment entry. All fields are free text.
///
/// Serialized with the storage names `nama`, `kode`, `unit`, `ukuran`,
/// `tahun`. Decoding is lenient: a missing key, `null`, `false`, or a zero
/// number decodes as `""`; other numbers and `true` decode to their text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "nama", default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(rename = "kode", default, deserialize_with = "lenient_text")]
    pub code: String,
    #[serde(rename = "unit", default, deserialize_with = "lenient_text")]
    pub unit: String,
    #[serde(rename = "ukuran", default, deserialize_with = "lenient_text")]
    pub size: String,
    #[serde(rename = "tahun", default, deserialize_with = "lenient_text")]
    pub year: String,
}

impl Record {
    /// Start building a record from its two required fields.
    pub fn builder(name: impl Into<String>, code: impl Into<String>) -> RecordBuilder {
        RecordBuilder::new(name, code)
    }

    /// Get the value of one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Code => &self.code,
            Field::Unit => &self.unit,
            Field::Size => &self.size,
            Field::Year => &self.year,
        }
    }

    /// Mutable access to one field.
    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Code => &mut self.code,
            Field::Unit => &mut self.unit,
            Field::Size => &mut self.size,
            Field::Year => &mut self.year,
        }
    }

    /// Field values in column order.
    pub fn values(&self) -> [&str; 5] {
        Field::ALL.map(|f| self.get(f))
    }
}

/// Builder for records.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            record: Record {
                name: name.into(),
                code: code.into(),
                ..Record::default()
            },
        }
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.record.unit = unit.into();
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.record.size = size.into();
        self
    }

    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.record.year = year.into();
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientText)
}

/// Accepts any JSON scalar and turns it into text. Falsy values become empty.
struct LenientText;

impl<'de> Visitor<'de> for LenientText {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean, or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
        Ok(if v { "true".to_string() } else { String::new() })
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(if v == 0 { String::new() } else { v.to_string() })
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(if v == 0 { String::new() } else { v.to_string() })
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(if v == 0.0 || v.is_nan() {
            String::new()
        } else {
            v.to_string()
        })
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suit_a() -> Record {
        Record::builder("Suit A", "SA1")
            .unit("U1")
            .size("M")
            .year("2024")
            .build()
    }

    #[test]
    fn test_serializes_with_storage_names() {
        let json = serde_json::to_string(&suit_a()).unwrap();
        assert_eq!(
            json,
            r#"{"nama":"Suit A","kode":"SA1","unit":"U1","ukuran":"M","tahun":"2024"}"#
        );
    }

    #[test]
    fn test_missing_keys_decode_empty() {
        let record: Record = serde_json::from_str(r#"{"nama":"Suit A","kode":"SA1"}"#).unwrap();
        assert_eq!(record, Record::builder("Suit A", "SA1").build());
    }

    #[test]
    fn test_scalars_decode_as_text() {
        let record: Record = serde_json::from_str(
            r#"{"nama":"Suit B","kode":null,"unit":false,"ukuran":true,"tahun":2024}"#,
        )
        .unwrap();
        assert_eq!(record.code, "");
        assert_eq!(record.unit, "");
        assert_eq!(record.size, "true");
        assert_eq!(record.year, "2024");
    }

    #[test]
    fn test_zero_decodes_empty() {
        let record: Record = serde_json::from_str(r#"{"tahun":0}"#).unwrap();
        assert_eq!(record.year, "");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let record: Record =
            serde_json::from_str(r#"{"nama":"X","kode":"Y","warna":"merah"}"#).unwrap();
        assert_eq!(record, Record::builder("X", "Y").build());
    }

    #[test]
    fn test_nested_value_rejected() {
        let result = serde_json::from_str::<Record>(r#"{"nama":{"first":"X"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_get_follows_column_order() {
        let record = suit_a();
        assert_eq!(record.values(), ["Suit A", "SA1", "U1", "M", "2024"]);
        assert_eq!(record.get(Field::Size), "M");
    }

    #[test]
    fn test_get_mut_updates_one_field() {
        let mut record = suit_a();
        *record.get_mut(Field::Size) = "L".into();
        assert_eq!(record.size, "L");
        assert_eq!(record.name, "Suit A");
    }
}

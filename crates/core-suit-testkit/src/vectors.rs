//! Golden storage vectors.
//!
//! Each vector is a payload as it may be found under the collection key,
//! paired with the collection it must load as. Payloads written by the
//! browser page (numbers, nulls, missing keys) are included so that any
//! reader of the same storage slot agrees on what they mean.

use core_suit_model::{Collection, Record};
use core_suit_store::{decode_collection, encode_collection, CollectionStore, MemoryBackend};
use core_suit_store::{Backend, DEFAULT_COLLECTION_KEY};

/// A golden storage vector.
#[derive(Debug, Clone)]
pub struct StorageVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Stored payload.
    pub payload: &'static str,
    /// Collection the payload loads as.
    pub expected: Collection,
    /// True if saving `expected` writes `payload` back byte for byte.
    pub canonical: bool,
}

/// Get all golden storage vectors.
pub fn all_vectors() -> Vec<StorageVector> {
    vec![
        StorageVector {
            name: "empty array",
            payload: "[]",
            expected: vec![],
            canonical: true,
        },
        StorageVector {
            name: "suit a",
            payload: r#"[{"nama":"Suit A","kode":"SA1","unit":"U1","ukuran":"M","tahun":"2024"}]"#,
            expected: vec![Record::builder("Suit A", "SA1")
                .unit("U1")
                .size("M")
                .year("2024")
                .build()],
            canonical: true,
        },
        StorageVector {
            name: "two records keep order",
            payload: r#"[{"nama":"B","kode":"2","unit":"","ukuran":"","tahun":""},{"nama":"A","kode":"1","unit":"","ukuran":"","tahun":""}]"#,
            expected: vec![Record::builder("B", "2").build(), Record::builder("A", "1").build()],
            canonical: true,
        },
        StorageVector {
            name: "markup stored verbatim",
            payload: r#"[{"nama":"<script>x</script>","kode":"A&B","unit":"","ukuran":"","tahun":""}]"#,
            expected: vec![Record::builder("<script>x</script>", "A&B").build()],
            canonical: true,
        },
        StorageVector {
            name: "missing keys",
            payload: r#"[{"nama":"Suit B","kode":"SB2"}]"#,
            expected: vec![Record::builder("Suit B", "SB2").build()],
            canonical: false,
        },
        StorageVector {
            name: "numeric year and null unit",
            payload: r#"[{"nama":"Suit C","kode":"SC3","unit":null,"ukuran":"L","tahun":2023}]"#,
            expected: vec![Record::builder("Suit C", "SC3").size("L").year("2023").build()],
            canonical: false,
        },
        StorageVector {
            name: "falsy values",
            payload: r#"[{"nama":"Suit D","kode":"SD4","unit":false,"ukuran":0,"tahun":""}]"#,
            expected: vec![Record::builder("Suit D", "SD4").build()],
            canonical: false,
        },
        StorageVector {
            name: "unknown keys ignored",
            payload: r#"[{"nama":"Suit E","kode":"SE5","warna":"hitam"}]"#,
            expected: vec![Record::builder("Suit E", "SE5").build()],
            canonical: false,
        },
        StorageVector {
            name: "not an array",
            payload: r#"{"nama":"Suit F","kode":"SF6"}"#,
            expected: vec![],
            canonical: false,
        },
        StorageVector {
            name: "array of scalars",
            payload: r#"["Suit G", 7]"#,
            expected: vec![],
            canonical: false,
        },
        StorageVector {
            name: "truncated",
            payload: r#"[{"nama":"Suit H""#,
            expected: vec![],
            canonical: false,
        },
    ]
}

/// Load `vector.payload` through a collection store.
pub fn load_vector(vector: &StorageVector) -> Collection {
    let backend = MemoryBackend::new();
    if backend.set(DEFAULT_COLLECTION_KEY, vector.payload).is_err() {
        return Vec::new();
    }
    CollectionStore::with_default_key(backend).load_all()
}

/// Verify every vector loads as expected, and canonical ones re-encode
/// to the same bytes.
pub fn verify_all_vectors() -> Vec<(String, bool)> {
    all_vectors()
        .iter()
        .map(|v| {
            let loads = load_vector(v) == v.expected;
            let encodes = !v.canonical
                || encode_collection(&v.expected).map_or(false, |p| p == v.payload);
            (v.name.to_string(), loads && encodes)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_pass() {
        for (name, ok) in verify_all_vectors() {
            assert!(ok, "Vector '{}' failed", name);
        }
    }

    #[test]
    fn test_decode_agrees_with_store() {
        for vector in all_vectors() {
            let decoded = decode_collection(vector.payload).unwrap_or_default();
            assert_eq!(decoded, load_vector(&vector), "Vector '{}'", vector.name);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let vectors = all_vectors();
        for (i, a) in vectors.iter().enumerate() {
            assert!(vectors[i + 1..].iter().all(|b| a.name != b.name));
        }
    }
}

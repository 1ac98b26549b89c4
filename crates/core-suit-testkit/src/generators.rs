//! Proptest generators for property-based testing.

use proptest::prelude::*;

use core_suit_model::{Collection, Field, FormFields, Record};

/// Free text for an optional field, including markup and padding.
pub fn field_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z0-9 ]{1,16}",
        "[ \t]{0,2}[a-zA-Z0-9<>&\"']{1,12}[ \t]{0,2}",
    ]
}

/// Text that stays non-empty after trimming.
pub fn required_text() -> impl Strategy<Value = String> {
    "[ \t]{0,2}[a-zA-Z0-9<>&\"'-]{1,12}[ \t]{0,2}"
}

/// Text that is empty after trimming.
pub fn blank_text() -> impl Strategy<Value = String> {
    "[ \t\n]{0,4}"
}

/// A record as it would be stored: every field trimmed, name and code set.
pub fn record() -> impl Strategy<Value = Record> {
    (
        required_text(),
        required_text(),
        field_text(),
        field_text(),
        field_text(),
    )
        .prop_map(|(name, code, unit, size, year)| Record {
            name: name.trim().to_string(),
            code: code.trim().to_string(),
            unit: unit.trim().to_string(),
            size: size.trim().to_string(),
            year: year.trim().to_string(),
        })
}

/// A collection of up to `max_len` records.
pub fn collection(max_len: usize) -> impl Strategy<Value = Collection> {
    prop::collection::vec(record(), 0..=max_len)
}

/// A staged form that passes validation.
pub fn valid_form() -> impl Strategy<Value = FormFields> {
    form_params(Just(None)).prop_map(|p| form_from_params(&p))
}

/// A staged form with at least one blank required field.
pub fn invalid_form() -> impl Strategy<Value = FormFields> {
    form_params(blanked_fields().prop_map(Some)).prop_map(|p| form_from_params(&p))
}

/// Parameters for generating a staged form.
#[derive(Debug, Clone)]
pub struct FormParams {
    pub name: String,
    pub code: String,
    pub unit: String,
    pub size: String,
    pub year: String,
    /// Required fields replaced by blank text.
    pub blank: Option<Vec<Field>>,
}

impl Arbitrary for FormParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        form_params(prop::option::weighted(0.4, blanked_fields())).boxed()
    }
}

fn blanked_fields() -> impl Strategy<Value = Vec<Field>> {
    prop_oneof![
        Just(vec![Field::Name]),
        Just(vec![Field::Code]),
        Just(vec![Field::Name, Field::Code]),
    ]
}

fn form_params(
    blank: impl Strategy<Value = Option<Vec<Field>>>,
) -> impl Strategy<Value = FormParams> {
    (
        required_text(),
        required_text(),
        field_text(),
        field_text(),
        field_text(),
        blank,
        blank_text(),
    )
        .prop_map(|(name, code, unit, size, year, blank, filler)| {
            let mut params = FormParams {
                name,
                code,
                unit,
                size,
                year,
                blank,
            };
            for field in params.blank.clone().unwrap_or_default() {
                match field {
                    Field::Name => params.name = filler.clone(),
                    _ => params.code = filler.clone(),
                }
            }
            params
        })
}

/// Build the staged form described by `params`.
pub fn form_from_params(params: &FormParams) -> FormFields {
    FormFields::new()
        .with(Field::Name, params.name.clone())
        .with(Field::Code, params.code.clone())
        .with(Field::Unit, params.unit.clone())
        .with(Field::Size, params.size.clone())
        .with(Field::Year, params.year.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{ScriptedConfirm, TestFixture};
    use core_suit::{DeleteOutcome, EditorError, SubmitOutcome};
    use core_suit_store::{decode_collection, encode_collection};

    fn submit_form(fixture: &mut TestFixture, form: &FormFields) -> core_suit::Result<SubmitOutcome> {
        for field in Field::ALL {
            fixture.editor.set_field(field, form.get(field));
        }
        fixture.editor.submit()
    }

    proptest! {
        #[test]
        fn test_stored_payload_round_trips(records in collection(12)) {
            let payload = encode_collection(&records).unwrap();
            prop_assert_eq!(decode_collection(&payload).unwrap(), records);
        }

        #[test]
        fn test_create_appends(records in collection(8), form in valid_form()) {
            let mut fixture = TestFixture::with_records(&records);
            fixture.editor.open_add();
            let outcome = submit_form(&mut fixture, &form).unwrap();

            let stored = fixture.stored();
            prop_assert_eq!(outcome, SubmitOutcome::Created { index: records.len() });
            prop_assert_eq!(&stored[..records.len()], &records[..]);
            prop_assert_eq!(&stored[records.len()], &form.validate().unwrap());
        }

        #[test]
        fn test_edit_replaces_only_target(
            records in prop::collection::vec(record(), 1..=8),
            form in valid_form(),
            pick in any::<prop::sample::Index>(),
        ) {
            let index = pick.index(records.len());
            let mut fixture = TestFixture::with_records(&records);
            fixture.editor.open_edit(index);
            fixture.editor.clear_form();
            submit_form(&mut fixture, &form).unwrap();

            let stored = fixture.stored();
            prop_assert_eq!(stored.len(), records.len());
            for (i, record) in stored.iter().enumerate() {
                if i == index {
                    prop_assert_eq!(record, &form.validate().unwrap());
                } else {
                    prop_assert_eq!(record, &records[i]);
                }
            }
        }

        #[test]
        fn test_delete_removes_only_target(
            records in prop::collection::vec(record(), 1..=8),
            pick in any::<prop::sample::Index>(),
        ) {
            let index = pick.index(records.len());
            let mut fixture = TestFixture::with_records(&records);
            let outcome = fixture.editor.delete(index, &mut ScriptedConfirm::accept()).unwrap();

            let mut expected = records.clone();
            let removed = expected.remove(index);
            prop_assert_eq!(outcome, DeleteOutcome::Deleted { index, record: removed });
            prop_assert_eq!(fixture.stored(), expected);
        }

        #[test]
        fn test_declined_delete_leaves_payload(
            records in prop::collection::vec(record(), 1..=8),
            pick in any::<prop::sample::Index>(),
        ) {
            let index = pick.index(records.len());
            let mut fixture = TestFixture::with_records(&records);
            let before = fixture.raw();

            fixture.editor.delete(index, &mut ScriptedConfirm::decline()).unwrap();
            prop_assert_eq!(fixture.raw(), before);
        }

        #[test]
        fn test_invalid_form_never_writes(records in collection(4), form in invalid_form()) {
            let mut fixture = TestFixture::with_records(&records);
            let before = fixture.raw();
            fixture.editor.open_add();

            let result = submit_form(&mut fixture, &form);
            prop_assert!(matches!(result, Err(EditorError::Validation(_))));
            prop_assert!(fixture.editor.is_open());
            prop_assert_eq!(fixture.raw(), before);
        }

        #[test]
        fn test_blanked_params_match_validation(params in any::<FormParams>()) {
            let result = form_from_params(&params).validate();
            match &params.blank {
                Some(fields) => {
                    let err = result.unwrap_err();
                    prop_assert_eq!(err.fields(), &fields[..]);
                }
                None => prop_assert!(result.is_ok()),
            }
        }
    }
}

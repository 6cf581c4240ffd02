//! Submit-time validation of the form.
//!
//! Values are read from a [`FormValues`] snapshot keyed by [`FieldId`],
//! never from the DOM.

use std::collections::HashMap;
use std::fmt;

use crate::types::{FieldId, QuerySpec, SelectedArchive, StructuredFields};

/// Snapshot of every text field at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    values: HashMap<FieldId, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Current value of a field, empty when never set.
    pub fn get(&self, field: FieldId) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    fn is_blank(&self, field: FieldId) -> bool {
        self.get(field).trim().is_empty()
    }
}

/// Inputs that were missing when the user tried to submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingInputs {
    fields: Vec<FieldId>,
}

impl MissingInputs {
    pub fn fields(&self) -> &[FieldId] {
        &self.fields
    }

    /// One clause per missing input, archive first.
    pub fn message(&self) -> String {
        self.fields
            .iter()
            .map(FieldId::missing_message)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for MissingInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Check the required inputs for the active mode and build the query.
///
/// The archive is always required. Natural-language mode requires the
/// description; structured mode requires all five fields. Whitespace-only
/// values count as missing.
pub fn validate(
    values: &FormValues,
    natural_language: bool,
    archive: Option<&SelectedArchive>,
) -> Result<QuerySpec, MissingInputs> {
    let mut missing = Vec::new();

    if archive.is_none() {
        missing.push(FieldId::Archive);
    }

    if natural_language {
        if values.is_blank(FieldId::Description) {
            missing.push(FieldId::Description);
        }
    } else {
        missing.extend(FieldId::STRUCTURED.into_iter().filter(|f| values.is_blank(*f)));
    }

    if !missing.is_empty() {
        return Err(MissingInputs { fields: missing });
    }

    let query = if natural_language {
        QuerySpec::NaturalLanguage(values.get(FieldId::Description).to_string())
    } else {
        QuerySpec::Structured(StructuredFields {
            desired_outcome: values.get(FieldId::Outcome).to_string(),
            important_date: values.get(FieldId::Date).to_string(),
            important_people: values.get(FieldId::People).to_string(),
            important_events: values.get(FieldId::Events).to_string(),
            important_location: values.get(FieldId::Location).to_string(),
        })
    };
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn archive() -> SelectedArchive {
        SelectedArchive::new("chats.zip", 10_000_000)
    }

    fn all_structured() -> FormValues {
        FormValues::new()
            .with(FieldId::Outcome, "find the trip")
            .with(FieldId::Date, "2024-05-17")
            .with(FieldId::People, "Alice, Bob")
            .with(FieldId::Events, "flight")
            .with(FieldId::Location, "London")
    }

    #[test]
    fn test_natural_language_missing_description_only() {
        let err = validate(&FormValues::new(), true, Some(&archive())).unwrap_err();
        assert_eq!(err.fields(), &[FieldId::Description]);
        assert_eq!(err.message(), FieldId::Description.missing_message());
    }

    #[test]
    fn test_natural_language_ignores_structured_fields() {
        let values = FormValues::new().with(FieldId::Description, "Alice meets Bob");
        let query = validate(&values, true, Some(&archive())).unwrap();
        assert_eq!(query, QuerySpec::NaturalLanguage("Alice meets Bob".into()));
    }

    #[test]
    fn test_structured_names_every_missing_field() {
        let values = FormValues::new()
            .with(FieldId::Outcome, "x")
            .with(FieldId::Events, "   ");
        let err = validate(&values, false, None).unwrap_err();
        assert_eq!(
            err.fields(),
            &[FieldId::Archive, FieldId::Date, FieldId::People, FieldId::Events, FieldId::Location]
        );
        let message = err.message();
        for field in err.fields() {
            assert!(message.contains(field.missing_message()));
        }
        assert!(message.starts_with(FieldId::Archive.missing_message()));
        assert!(!message.contains(FieldId::Outcome.missing_message()));
    }

    #[test]
    fn test_structured_complete() {
        let query = validate(&all_structured(), false, Some(&archive())).unwrap();
        match query {
            QuerySpec::Structured(fields) => {
                assert_eq!(fields.desired_outcome, "find the trip");
                assert_eq!(fields.important_location, "London");
            }
            other => panic!("expected structured query, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_archive_alone() {
        let err = validate(&all_structured(), false, None).unwrap_err();
        assert_eq!(err.fields(), &[FieldId::Archive]);
        assert_eq!(err.to_string(), FieldId::Archive.missing_message());
    }
}

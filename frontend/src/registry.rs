//! Form-value registry.
//!
//! Every text field is bound to its own signal, keyed by [`FieldId`].
//! The workflow reads a [`FormValues`] snapshot at submit time instead of
//! looking inputs up in the document.

use std::collections::HashMap;

use leptos::*;

use crate::types::FieldId;
use crate::validation::FormValues;

#[derive(Clone)]
pub struct FieldRegistry {
    fields: HashMap<FieldId, RwSignal<String>>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        let fields = FieldId::TEXT_FIELDS
            .into_iter()
            .map(|field| (field, create_rw_signal(String::new())))
            .collect();
        Self { fields }
    }

    /// Signal bound to a field. Unknown fields get a detached empty signal.
    pub fn signal(&self, field: FieldId) -> RwSignal<String> {
        self.fields
            .get(&field)
            .copied()
            .unwrap_or_else(|| create_rw_signal(String::new()))
    }

    /// Read every field without subscribing the caller.
    pub fn snapshot(&self) -> FormValues {
        let mut values = FormValues::new();
        for (field, signal) in &self.fields {
            values.set(*field, signal.get_untracked());
        }
        values
    }

    pub fn clear(&self, fields: &[FieldId]) {
        for field in fields {
            if let Some(signal) = self.fields.get(field) {
                signal.set(String::new());
            }
        }
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CLEARED_ON_SUCCESS;

    #[test]
    fn test_snapshot_and_clear() {
        let runtime = create_runtime();
        let registry = FieldRegistry::new();
        for field in FieldId::TEXT_FIELDS {
            registry.signal(field).set(format!("{} value", field.label()));
        }

        let values = registry.snapshot();
        for field in FieldId::TEXT_FIELDS {
            assert_eq!(values.get(field), format!("{} value", field.label()));
        }

        registry.clear(&CLEARED_ON_SUCCESS);

        let values = registry.snapshot();
        assert_eq!(values.get(FieldId::Outcome), "");
        for field in FieldId::TEXT_FIELDS.into_iter().filter(|f| *f != FieldId::Outcome) {
            assert_eq!(values.get(field), format!("{} value", field.label()));
        }
        assert!(!values.get(FieldId::Description).is_empty());
        runtime.dispose();
    }

    #[test]
    fn test_signals_are_shared_between_clones() {
        let runtime = create_runtime();
        let registry = FieldRegistry::new();
        let copy = registry.clone();
        copy.signal(FieldId::People).set("Alice".into());
        assert_eq!(registry.snapshot().get(FieldId::People), "Alice");
        assert_eq!(registry.snapshot().get(FieldId::Archive), "");
        runtime.dispose();
    }
}

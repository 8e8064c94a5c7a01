//! Composite validator assembly

use super::field::FieldDescriptor;
use super::validator::{AnyString, Validator, Violations};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Current value of every field, keyed by field name
pub type ValueMap = BTreeMap<String, String>;

/// Violation messages of every failing field, keyed by field name
pub type ErrorMap = BTreeMap<String, Violations>;

/// One validator per field name
#[derive(Debug, Clone, Default)]
pub struct CompositeValidator {
    entries: HashMap<String, Arc<dyn Validator>>,
}

impl CompositeValidator {
    /// Validator registered for `name`
    pub fn get(&self, name: &str) -> Option<&dyn Validator> {
        self.entries.get(name).map(|v| v.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered field names, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Run every field's validator against its value
    ///
    /// A field missing from `values` is checked as absent.
    pub fn validate_all(&self, values: &ValueMap) -> ErrorMap {
        self.entries
            .iter()
            .filter_map(|(name, validator)| {
                let candidate = values.get(name).map(String::as_str);
                validator
                    .validate(candidate)
                    .err()
                    .map(|violations| (name.clone(), violations))
            })
            .collect()
    }
}

/// Build the composite validator for a list of descriptors
///
/// Fields without a validator get [`AnyString`]. A repeated name replaces the
/// earlier entry; callers that care reject duplicates first.
pub fn assemble(descriptors: &[FieldDescriptor]) -> CompositeValidator {
    let entries = descriptors.iter().fold(HashMap::new(), |mut acc, field| {
        let validator = field
            .validator
            .clone()
            .unwrap_or_else(|| Arc::new(AnyString) as Arc<dyn Validator>);
        acc.insert(field.name.clone(), validator);
        acc
    });
    CompositeValidator { entries }
}

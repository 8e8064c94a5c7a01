//! Requiredness probing

use super::schema::CompositeValidator;

/// Whether a field must be filled in
///
/// Runs the field's validator against an absent value: a field whose
/// validator rejects "nothing" is required. Unknown names are optional.
pub fn is_required(name: &str, composite: &CompositeValidator) -> bool {
    composite
        .get(name)
        .is_some_and(|validator| validator.validate(None).is_err())
}

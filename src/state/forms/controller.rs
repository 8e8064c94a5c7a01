//! Form controller: values, errors and the submit cycle

use super::error::{FormError, FormResult};
use super::field::FieldDescriptor;
use super::required;
use super::schema::{assemble, CompositeValidator, ErrorMap, ValueMap};
use std::collections::HashSet;

/// Where the form is in its edit/submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Pristine,
    Editing,
    Submitting,
    Accepted,
    Rejected,
}

/// Result of a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the full value map
    Accepted(ValueMap),
    /// Messages for each failing field
    Rejected(ErrorMap),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// Receives the value map of every accepted submit
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    fn accept(&mut self, values: &ValueMap);
}

/// Owns the state of one form instance
#[derive(Debug, Clone)]
pub struct FormController {
    descriptors: Vec<FieldDescriptor>,
    schema: CompositeValidator,
    values: ValueMap,
    errors: ErrorMap,
    phase: FormPhase,
}

impl FormController {
    /// Create a controller for a list of descriptors
    ///
    /// Field names must be unique.
    pub fn new(descriptors: Vec<FieldDescriptor>) -> FormResult<Self> {
        let mut seen = HashSet::new();
        for field in &descriptors {
            if !seen.insert(field.name.as_str()) {
                return Err(FormError::DuplicateField(field.name.clone()));
            }
        }

        let schema = assemble(&descriptors);
        let values = initial_values(&descriptors);
        Ok(Self {
            descriptors,
            schema,
            values,
            errors: ErrorMap::new(),
            phase: FormPhase::Pristine,
        })
    }

    pub fn descriptors(&self) -> &[FieldDescriptor] {
        &self.descriptors
    }

    pub fn descriptor(&self, name: &str) -> Option<&FieldDescriptor> {
        self.descriptors.iter().find(|f| f.name == name)
    }

    pub fn schema(&self) -> &CompositeValidator {
        &self.schema
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn values(&self) -> &ValueMap {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Messages for one field (empty when it has none)
    pub fn field_errors(&self, name: &str) -> &[String] {
        self.errors.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_required(&self, name: &str) -> bool {
        required::is_required(name, &self.schema)
    }

    /// Replace one field's value
    ///
    /// Clears that field's errors only; nothing is re-validated until the
    /// next submit.
    pub fn set_field_value(&mut self, name: &str, value: impl Into<String>) -> FormResult<()> {
        let slot = self
            .values
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        *slot = value.into();
        self.errors.remove(name);
        self.phase = FormPhase::Editing;
        Ok(())
    }

    /// Validate every field against its current value
    pub fn submit(&mut self) -> SubmitOutcome {
        self.phase = FormPhase::Submitting;
        let errors = self.schema.validate_all(&self.values);

        if errors.is_empty() {
            self.errors.clear();
            self.phase = FormPhase::Accepted;
            SubmitOutcome::Accepted(self.values.clone())
        } else {
            self.errors = errors.clone();
            self.phase = FormPhase::Rejected;
            SubmitOutcome::Rejected(errors)
        }
    }

    /// Submit and hand an accepted value map to `sink`
    pub fn submit_to(&mut self, sink: &mut dyn SubmissionSink) -> SubmitOutcome {
        let outcome = self.submit();
        if let SubmitOutcome::Accepted(values) = &outcome {
            sink.accept(values);
        }
        outcome
    }

    /// Back to initial values with no errors
    pub fn reset(&mut self) {
        self.values = initial_values(&self.descriptors);
        self.errors.clear();
        self.phase = FormPhase::Pristine;
    }
}

fn initial_values(descriptors: &[FieldDescriptor]) -> ValueMap {
    descriptors
        .iter()
        .map(|f| (f.name.clone(), f.initial_value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::field::SelectOption;
    use crate::state::forms::validator::StringSchema;
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    fn username_form() -> FormController {
        FormController::new(vec![FieldDescriptor::text("username", "Username")
            .with_validator(StringSchema::new().min_length(2, None))])
        .unwrap()
    }

    fn values(pairs: &[(&str, &str)]) -> ValueMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    mod lifecycle_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_form_is_pristine_with_initial_values() {
            let form = FormController::new(vec![
                FieldDescriptor::text("a", "A").with_initial_value("x"),
                FieldDescriptor::text("b", "B"),
            ])
            .unwrap();
            assert_eq!(form.phase(), FormPhase::Pristine);
            assert_eq!(form.values(), &values(&[("a", "x"), ("b", "")]));
            assert!(form.errors().is_empty());
        }

        #[test]
        fn test_duplicate_names_are_rejected() {
            let result = FormController::new(vec![
                FieldDescriptor::text("email", "Email"),
                FieldDescriptor::textarea("email", "Email again"),
            ]);
            assert!(matches!(result, Err(FormError::DuplicateField(name)) if name == "email"));
        }

        #[test]
        fn test_edit_enters_editing() {
            let mut form = username_form();
            form.set_field_value("username", "al").unwrap();
            assert_eq!(form.phase(), FormPhase::Editing);
        }

        #[test]
        fn test_edit_after_accept_returns_to_editing() {
            let mut form = username_form();
            form.set_field_value("username", "alice").unwrap();
            form.submit();
            assert_eq!(form.phase(), FormPhase::Accepted);
            form.set_field_value("username", "bob").unwrap();
            assert_eq!(form.phase(), FormPhase::Editing);
        }

        #[test]
        fn test_reset_restores_initial_state() {
            let mut form = username_form();
            form.submit();
            form.set_field_value("username", "zz").unwrap();
            form.reset();
            assert_eq!(form.phase(), FormPhase::Pristine);
            assert_eq!(form.value("username"), Some(""));
            assert!(form.errors().is_empty());
        }
    }

    mod edit_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_then_read_round_trips() {
            let mut form = username_form();
            for v in ["", "a", "multi\nline", "ünïcødé", "  padded  "] {
                form.set_field_value("username", v).unwrap();
                assert_eq!(form.value("username"), Some(v));
            }
        }

        #[test]
        fn test_unknown_field_is_an_error() {
            let mut form = username_form();
            let err = form.set_field_value("password", "secret").unwrap_err();
            assert!(matches!(err, FormError::UnknownField(name) if name == "password"));
            assert_eq!(form.phase(), FormPhase::Pristine);
            assert!(form.value("password").is_none());
        }

        #[test]
        fn test_edit_clears_only_that_fields_errors() {
            let mut form = FormController::new(vec![
                FieldDescriptor::text("first", "First")
                    .with_validator(StringSchema::new().min_length(1, None)),
                FieldDescriptor::text("last", "Last")
                    .with_validator(StringSchema::new().min_length(1, None)),
            ])
            .unwrap();
            form.submit();
            assert_eq!(form.errors().len(), 2);

            form.set_field_value("first", "Ada").unwrap();
            assert!(form.field_errors("first").is_empty());
            assert_eq!(form.field_errors("last").len(), 1);
        }

        #[test]
        fn test_edit_does_not_revalidate() {
            let mut form = username_form();
            form.set_field_value("username", "a").unwrap();
            assert!(form.errors().is_empty());
        }
    }

    mod submit_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_short_username_is_rejected() {
            let mut form = username_form();
            form.set_field_value("username", "a").unwrap();

            let outcome = form.submit();
            assert_eq!(form.phase(), FormPhase::Rejected);
            let SubmitOutcome::Rejected(errors) = outcome else {
                panic!("expected rejection");
            };
            assert!(errors["username"][0].contains("at least 2"));
            assert_eq!(form.field_errors("username"), errors["username"].as_slice());
        }

        #[test]
        fn test_valid_username_is_accepted() {
            let mut form = username_form();
            form.set_field_value("username", "ab").unwrap();

            let outcome = form.submit();
            assert_eq!(form.phase(), FormPhase::Accepted);
            assert_eq!(outcome, SubmitOutcome::Accepted(values(&[("username", "ab")])));
        }

        #[test]
        fn test_untouched_select_is_rejected() {
            let mut form = FormController::new(vec![FieldDescriptor::select(
                "category",
                "Category",
                vec![SelectOption::new("tech", "Technology")],
            )
            .with_validator(StringSchema::new().min_length(1, None))])
            .unwrap();

            assert!(form.is_required("category"));
            let outcome = form.submit();
            assert!(
                matches!(outcome, SubmitOutcome::Rejected(ref e) if e.contains_key("category"))
            );
        }

        #[test]
        fn test_unvalidated_empty_field_is_accepted() {
            let mut form = FormController::new(vec![
                FieldDescriptor::text("username", "Username")
                    .with_validator(StringSchema::new().min_length(2, None)),
                FieldDescriptor::textarea("notes", "Notes"),
            ])
            .unwrap();
            form.set_field_value("username", "alice").unwrap();

            assert!(!form.is_required("notes"));
            let outcome = form.submit();
            assert_eq!(
                outcome,
                SubmitOutcome::Accepted(values(&[("notes", ""), ("username", "alice")]))
            );
        }

        #[test]
        fn test_unvalidated_field_accepts_any_value() {
            let mut form =
                FormController::new(vec![FieldDescriptor::text("nickname", "Nickname")]).unwrap();
            for value in ["x", "  padded  ", "line one\nline two", "héllo 世界 🚀", "\t"] {
                form.set_field_value("nickname", value).unwrap();
                assert_eq!(
                    form.submit(),
                    SubmitOutcome::Accepted(values(&[("nickname", value)]))
                );
                assert!(form.errors().is_empty());
            }
        }

        #[test]
        fn test_submit_is_idempotent() {
            let mut rejected = username_form();
            rejected.set_field_value("username", "a").unwrap();
            assert_eq!(rejected.submit(), rejected.submit());

            let mut accepted = username_form();
            accepted.set_field_value("username", "abc").unwrap();
            assert_eq!(accepted.submit(), accepted.submit());
        }

        #[test]
        fn test_resubmit_clears_fixed_errors() {
            let mut form = username_form();
            form.submit();
            assert!(!form.errors().is_empty());
            form.set_field_value("username", "fixed").unwrap();
            assert!(form.submit().is_accepted());
            assert!(form.errors().is_empty());
        }
    }

    mod sink_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_sink_receives_accepted_values_once() {
            let mut form = username_form();
            form.set_field_value("username", "ab").unwrap();

            let mut sink = MockSubmissionSink::new();
            sink.expect_accept()
                .with(eq(values(&[("username", "ab")])))
                .times(1)
                .return_const(());

            assert!(form.submit_to(&mut sink).is_accepted());
        }

        #[test]
        fn test_sink_receives_nothing_on_rejection() {
            let mut form = username_form();
            let mut sink = MockSubmissionSink::new();
            sink.expect_accept().times(0);

            assert!(!form.submit_to(&mut sink).is_accepted());
        }
    }
}

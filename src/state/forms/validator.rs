//! Validator capability for form fields
//!
//! A validator checks a candidate value and either accepts it or returns the
//! list of human-readable violations. The candidate is `None` when no value
//! was supplied at all; the requiredness probe relies on that sentinel.

use regex::Regex;
use std::fmt;

/// Messages produced by a failed check, in the order the checks ran
pub type Violations = Vec<String>;

/// Checks a candidate field value
pub trait Validator: Send + Sync {
    fn validate(&self, candidate: Option<&str>) -> Result<(), Violations>;
}

impl<F> Validator for F
where
    F: Fn(Option<&str>) -> Result<(), Violations> + Send + Sync,
{
    fn validate(&self, candidate: Option<&str>) -> Result<(), Violations> {
        self(candidate)
    }
}

impl fmt::Debug for dyn Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<validator>")
    }
}

/// Accepts any string, including an absent one
///
/// Substituted for fields that declare no validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyString;

impl Validator for AnyString {
    fn validate(&self, _candidate: Option<&str>) -> Result<(), Violations> {
        Ok(())
    }
}

/// A single check with an optional custom message
#[derive(Debug, Clone)]
struct Rule<T> {
    value: T,
    message: Option<String>,
}

impl<T> Rule<T> {
    fn message_or(&self, default: impl FnOnce() -> String) -> String {
        self.message.clone().unwrap_or_else(default)
    }
}

/// String validator built from declarative checks
///
/// Absent values fail with "Required" unless the schema is optional. A
/// present value runs every configured check and reports all failures.
#[derive(Debug, Clone, Default)]
pub struct StringSchema {
    optional: bool,
    required_message: Option<String>,
    min_length: Option<Rule<usize>>,
    max_length: Option<Rule<usize>>,
    pattern: Option<Rule<Regex>>,
    one_of: Option<Rule<Vec<String>>>,
}

impl StringSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept an absent value
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Message used when the value is absent
    pub fn required_message(mut self, message: impl Into<String>) -> Self {
        self.required_message = Some(message.into());
        self
    }

    /// Minimum length in characters
    pub fn min_length(mut self, min: usize, message: Option<String>) -> Self {
        self.min_length = Some(Rule {
            value: min,
            message,
        });
        self
    }

    /// Maximum length in characters
    pub fn max_length(mut self, max: usize, message: Option<String>) -> Self {
        self.max_length = Some(Rule {
            value: max,
            message,
        });
        self
    }

    /// Value must match the regular expression
    pub fn pattern(mut self, pattern: Regex, message: Option<String>) -> Self {
        self.pattern = Some(Rule {
            value: pattern,
            message,
        });
        self
    }

    /// Value must be one of the listed strings
    pub fn one_of(mut self, allowed: Vec<String>, message: Option<String>) -> Self {
        self.one_of = Some(Rule {
            value: allowed,
            message,
        });
        self
    }
}

impl Validator for StringSchema {
    fn validate(&self, candidate: Option<&str>) -> Result<(), Violations> {
        let Some(value) = candidate else {
            if self.optional {
                return Ok(());
            }
            let message = self
                .required_message
                .clone()
                .unwrap_or_else(|| "Required".to_string());
            return Err(vec![message]);
        };

        let mut violations = Vec::new();
        let length = value.chars().count();

        if let Some(rule) = &self.min_length {
            if length < rule.value {
                violations.push(rule.message_or(|| {
                    format!("String must contain at least {} character(s)", rule.value)
                }));
            }
        }

        if let Some(rule) = &self.max_length {
            if length > rule.value {
                violations.push(rule.message_or(|| {
                    format!("String must contain at most {} character(s)", rule.value)
                }));
            }
        }

        if let Some(rule) = &self.pattern {
            if !rule.value.is_match(value) {
                violations.push(rule.message_or(|| {
                    format!("String must match the pattern {}", rule.value.as_str())
                }));
            }
        }

        if let Some(rule) = &self.one_of {
            if !rule.value.iter().any(|allowed| allowed == value) {
                violations.push(
                    rule.message_or(|| format!("Must be one of: {}", rule.value.join(", "))),
                );
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_any_string_accepts_everything() {
        assert!(AnyString.validate(None).is_ok());
        assert!(AnyString.validate(Some("")).is_ok());
        assert!(AnyString.validate(Some("anything at all")).is_ok());
    }

    #[test]
    fn test_schema_rejects_absent_by_default() {
        let schema = StringSchema::new();
        assert_eq!(schema.validate(None), Err(vec!["Required".to_string()]));
    }

    #[test]
    fn test_optional_schema_accepts_absent() {
        let schema = StringSchema::new().min_length(3, None).optional();
        assert!(schema.validate(None).is_ok());
        // Present values are still checked
        assert!(schema.validate(Some("ab")).is_err());
    }

    #[test]
    fn test_custom_required_message() {
        let schema = StringSchema::new().required_message("Pick one");
        assert_eq!(schema.validate(None), Err(vec!["Pick one".to_string()]));
    }

    #[test]
    fn test_min_length_default_message() {
        let schema = StringSchema::new().min_length(2, None);
        let violations = schema.validate(Some("a")).unwrap_err();
        assert_eq!(
            violations,
            vec!["String must contain at least 2 character(s)".to_string()]
        );
        assert!(schema.validate(Some("ab")).is_ok());
    }

    #[test]
    fn test_min_length_counts_characters_not_bytes() {
        let schema = StringSchema::new().min_length(2, None);
        // One character, two bytes
        assert!(schema.validate(Some("é")).is_err());
        assert!(schema.validate(Some("éé")).is_ok());
    }

    #[test]
    fn test_custom_message_overrides_default() {
        let schema = StringSchema::new().min_length(1, Some("Please select a category.".into()));
        assert_eq!(
            schema.validate(Some("")),
            Err(vec!["Please select a category.".to_string()])
        );
    }

    #[test]
    fn test_all_failures_are_reported_in_order() {
        let schema = StringSchema::new()
            .min_length(5, None)
            .pattern(Regex::new("^[0-9]+$").unwrap(), Some("Digits only".into()));
        let violations = schema.validate(Some("ab")).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(violations[0].contains("at least 5"));
        assert_eq!(violations[1], "Digits only");
    }

    #[test]
    fn test_max_length() {
        let schema = StringSchema::new().max_length(3, None);
        assert!(schema.validate(Some("abc")).is_ok());
        let violations = schema.validate(Some("abcd")).unwrap_err();
        assert!(violations[0].contains("at most 3"));
    }

    #[test]
    fn test_one_of() {
        let schema = StringSchema::new().one_of(vec!["tech".into(), "health".into()], None);
        assert!(schema.validate(Some("tech")).is_ok());
        let violations = schema.validate(Some("sports")).unwrap_err();
        assert_eq!(violations, vec!["Must be one of: tech, health".to_string()]);
    }

    #[test]
    fn test_closure_is_a_validator() {
        let no_spaces = |candidate: Option<&str>| match candidate {
            Some(v) if v.contains(' ') => Err(vec!["No spaces allowed".to_string()]),
            _ => Ok(()),
        };
        assert!(no_spaces.validate(Some("abc")).is_ok());
        assert!(no_spaces.validate(Some("a b")).is_err());
        assert!(no_spaces.validate(None).is_ok());
    }
}

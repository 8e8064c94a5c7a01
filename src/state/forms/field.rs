//! Form field descriptors

use super::validator::Validator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Which control a field is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    #[serde(rename = "input", alias = "text")]
    Text,
    #[serde(rename = "select", alias = "single-select")]
    SingleSelect,
    #[serde(rename = "textarea", alias = "multiline-text")]
    MultilineText,
    /// Any kind this build doesn't know how to render
    #[serde(other)]
    Unsupported,
}

impl FieldKind {
    /// Whether the field gets a control (and keyboard focus)
    pub fn is_renderable(&self) -> bool {
        !matches!(self, FieldKind::Unsupported)
    }
}

/// One choice of a single-select field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Presentational placement hints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutHint {
    /// Grid columns the field spans (treated as 1 when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_span: Option<u16>,
    /// Row the field belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<u16>,
    /// Group name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Extra style class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl LayoutHint {
    pub fn span(&self) -> u16 {
        self.col_span.unwrap_or(1).max(1)
    }
}

/// Describes a single form field
///
/// Built once by the caller and treated as immutable while a
/// [`FormController`](super::FormController) owns it.
#[derive(Clone)]
pub struct FieldDescriptor {
    pub kind: FieldKind,
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub description: Option<String>,
    pub options: Vec<SelectOption>,
    pub initial_value: String,
    pub validator: Option<Arc<dyn Validator>>,
    pub layout: LayoutHint,
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("label", &self.label)
            .field("placeholder", &self.placeholder)
            .field("description", &self.description)
            .field("options", &self.options)
            .field("initial_value", &self.initial_value)
            .field("has_validator", &self.validator.is_some())
            .field("layout", &self.layout)
            .finish()
    }
}

impl FieldDescriptor {
    fn new(kind: FieldKind, name: &str, label: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
            label: label.to_string(),
            placeholder: String::new(),
            description: None,
            options: Vec::new(),
            initial_value: String::new(),
            validator: None,
            layout: LayoutHint::default(),
        }
    }

    /// Create a single-line text field
    pub fn text(name: &str, label: &str) -> Self {
        Self::new(FieldKind::Text, name, label)
    }

    /// Create a multiline text field
    pub fn textarea(name: &str, label: &str) -> Self {
        Self::new(FieldKind::MultilineText, name, label)
    }

    /// Create a single-select field
    pub fn select(name: &str, label: &str, options: Vec<SelectOption>) -> Self {
        Self {
            options,
            ..Self::new(FieldKind::SingleSelect, name, label)
        }
    }

    /// Create a field of an arbitrary kind
    pub fn of_kind(kind: FieldKind, name: &str, label: &str) -> Self {
        Self::new(kind, name, label)
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_initial_value(mut self, value: &str) -> Self {
        self.initial_value = value.to_string();
        self
    }

    pub fn with_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    pub fn with_layout(mut self, layout: LayoutHint) -> Self {
        self.layout = layout;
        self
    }

    /// Label of the option whose value is `value`, if any
    pub fn option_label(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }

    /// Index of the option whose value is `value`, if any
    pub fn option_index(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::validator::StringSchema;

    #[test]
    fn test_text_field_defaults() {
        let field = FieldDescriptor::text("username", "Username");
        assert_eq!(field.kind, FieldKind::Text);
        assert_eq!(field.name, "username");
        assert!(field.initial_value.is_empty());
        assert!(field.validator.is_none());
        assert!(field.options.is_empty());
        assert_eq!(field.layout.span(), 1);
    }

    #[test]
    fn test_builder_sets_display_strings() {
        let field = FieldDescriptor::textarea("bio", "Bio")
            .with_placeholder("Tell us more")
            .with_description("Optional")
            .with_initial_value("hello")
            .with_validator(StringSchema::new());
        assert_eq!(field.kind, FieldKind::MultilineText);
        assert_eq!(field.placeholder, "Tell us more");
        assert_eq!(field.description.as_deref(), Some("Optional"));
        assert_eq!(field.initial_value, "hello");
        assert!(field.validator.is_some());
    }

    #[test]
    fn test_option_lookup() {
        let field = FieldDescriptor::select(
            "category",
            "Category",
            vec![
                SelectOption::new("tech", "Technology"),
                SelectOption::new("health", "Health"),
            ],
        );
        assert_eq!(field.option_label("health"), Some("Health"));
        assert_eq!(field.option_index("health"), Some(1));
        assert_eq!(field.option_label("finance"), None);
        assert_eq!(field.option_index(""), None);
    }

    #[test]
    fn test_kind_deserializes_canonical_and_alias_names() {
        let json = r#"["input", "text", "select", "single-select", "textarea", "multiline-text"]"#;
        let kinds: Vec<FieldKind> = serde_json::from_str(json).unwrap();
        assert_eq!(
            kinds,
            vec![
                FieldKind::Text,
                FieldKind::Text,
                FieldKind::SingleSelect,
                FieldKind::SingleSelect,
                FieldKind::MultilineText,
                FieldKind::MultilineText,
            ]
        );
    }

    #[test]
    fn test_unknown_kind_is_unsupported() {
        let kind: FieldKind = serde_json::from_str(r#""datepicker""#).unwrap();
        assert_eq!(kind, FieldKind::Unsupported);
        assert!(!kind.is_renderable());
        assert!(FieldKind::Text.is_renderable());
    }

    #[test]
    fn test_zero_span_is_clamped() {
        let hint = LayoutHint {
            col_span: Some(0),
            ..Default::default()
        };
        assert_eq!(hint.span(), 1);
    }

    #[test]
    fn test_debug_hides_validator() {
        let field = FieldDescriptor::text("a", "A").with_validator(StringSchema::new());
        let debug_str = format!("{:?}", field);
        assert!(debug_str.contains("has_validator: true"));
    }
}

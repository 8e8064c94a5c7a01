//! Declarative form definitions
//!
//! A definition is the serializable counterpart of a list of
//! [`FieldDescriptor`]s. Validators can't be serialized, so fields declare a
//! [`RuleSet`] instead, which is compiled into a [`StringSchema`].

use super::error::{FormError, FormResult};
use super::field::{FieldDescriptor, FieldKind, LayoutHint, SelectOption};
use super::validator::StringSchema;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Grid width used when a definition doesn't set one
pub const DEFAULT_COLUMNS: u16 = 3;

/// Widest grid a form may ask for
pub const MAX_COLUMNS: u16 = 12;

fn default_title() -> String {
    "Form".to_string()
}

/// A whole form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDefinition {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u16>,
    pub fields: Vec<FieldDefinition>,
}

/// One field of a form definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(default)]
    pub value: String,
    /// No rules means no validator: any value is accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleSet>,
    #[serde(flatten)]
    pub layout: LayoutHint,
}

/// Length bound with an optional message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRule {
    pub value: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Regular expression check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRule {
    pub regex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Allowed values check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneOfRule {
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Declarative string checks for one field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<LengthRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<LengthRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<PatternRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_of: Option<OneOfRule>,
    /// Restrict the value to the field's option values
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub in_options: bool,
}

impl RuleSet {
    fn compile(&self, field: &FieldDefinition) -> FormResult<StringSchema> {
        let mut schema = StringSchema::new();
        if self.optional {
            schema = schema.optional();
        }
        if let Some(message) = &self.required_message {
            schema = schema.required_message(message.clone());
        }
        if let Some(rule) = &self.min_length {
            schema = schema.min_length(rule.value, rule.message.clone());
        }
        if let Some(rule) = &self.max_length {
            schema = schema.max_length(rule.value, rule.message.clone());
        }
        if let Some(rule) = &self.pattern {
            let regex = Regex::new(&rule.regex).map_err(|source| FormError::InvalidPattern {
                field: field.name.clone(),
                source,
            })?;
            schema = schema.pattern(regex, rule.message.clone());
        }

        let message = self.one_of.as_ref().and_then(|r| r.message.clone());
        if self.in_options {
            let allowed = field.options.iter().map(|o| o.value.clone()).collect();
            schema = schema.one_of(allowed, message);
        } else if let Some(rule) = &self.one_of {
            schema = schema.one_of(rule.values.clone(), message);
        }

        Ok(schema)
    }
}

impl FieldDefinition {
    /// Turn the definition into a descriptor, compiling its rules
    pub fn to_descriptor(&self) -> FormResult<FieldDescriptor> {
        if self.kind == FieldKind::SingleSelect && self.options.is_empty() {
            return Err(FormError::MissingOptions(self.name.clone()));
        }

        let mut descriptor = FieldDescriptor::of_kind(self.kind, &self.name, &self.label)
            .with_placeholder(&self.placeholder)
            .with_initial_value(&self.value)
            .with_layout(self.layout.clone());
        descriptor.options = self.options.clone();
        descriptor.description = self.description.clone();

        if let Some(rules) = &self.rules {
            if !self.kind.is_renderable() {
                tracing::warn!(
                    "Field '{}' has rules but an unsupported type with no control",
                    self.name
                );
            }
            descriptor = descriptor.with_validator(rules.compile(self)?);
        }
        Ok(descriptor)
    }
}

impl FormDefinition {
    /// Parse a definition from JSON text
    pub fn from_json(json: &str) -> FormResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a definition from a JSON file
    pub fn load(path: &Path) -> FormResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_json_pretty(&self) -> FormResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Grid width, clamped to `1..=MAX_COLUMNS`
    pub fn columns(&self) -> u16 {
        self.columns.unwrap_or(DEFAULT_COLUMNS).clamp(1, MAX_COLUMNS)
    }

    /// Descriptors for every field, in declaration order
    pub fn descriptors(&self) -> FormResult<Vec<FieldDescriptor>> {
        self.fields.iter().map(FieldDefinition::to_descriptor).collect()
    }

    /// Username / category / description demo form
    pub fn sample() -> Self {
        Self {
            title: "Dynamic Form Builder".to_string(),
            columns: Some(DEFAULT_COLUMNS),
            fields: vec![
                FieldDefinition {
                    kind: FieldKind::Text,
                    name: "username".to_string(),
                    label: "Username".to_string(),
                    placeholder: "Enter your username".to_string(),
                    description: Some("Your unique username".to_string()),
                    options: Vec::new(),
                    value: String::new(),
                    rules: Some(RuleSet {
                        min_length: Some(LengthRule {
                            value: 2,
                            message: Some("Username must be at least 2 characters.".to_string()),
                        }),
                        ..Default::default()
                    }),
                    layout: LayoutHint {
                        col_span: Some(1),
                        ..Default::default()
                    },
                },
                FieldDefinition {
                    kind: FieldKind::SingleSelect,
                    name: "category".to_string(),
                    label: "Category".to_string(),
                    placeholder: "Select a category".to_string(),
                    description: Some("Choose a category that fits you best".to_string()),
                    options: vec![
                        SelectOption::new("tech", "Technology"),
                        SelectOption::new("health", "Health"),
                        SelectOption::new("finance", "Finance"),
                    ],
                    value: String::new(),
                    rules: Some(RuleSet {
                        min_length: Some(LengthRule {
                            value: 1,
                            message: Some("Please select a category.".to_string()),
                        }),
                        ..Default::default()
                    }),
                    layout: LayoutHint {
                        col_span: Some(2),
                        ..Default::default()
                    },
                },
                FieldDefinition {
                    kind: FieldKind::MultilineText,
                    name: "description".to_string(),
                    label: "Description".to_string(),
                    placeholder: "Enter a description".to_string(),
                    description: Some("Provide more details".to_string()),
                    options: Vec::new(),
                    value: String::new(),
                    rules: Some(RuleSet {
                        min_length: Some(LengthRule {
                            value: 1,
                            message: Some("Description is required.".to_string()),
                        }),
                        ..Default::default()
                    }),
                    layout: LayoutHint {
                        col_span: Some(1),
                        ..Default::default()
                    },
                },
            ],
        }
    }
}

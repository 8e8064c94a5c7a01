//! Form domain layer
//!
//! Turns a list of field descriptors into a validated form:
//! - `field`: field descriptors and layout hints
//! - `validator`: the validator capability and built-in string schema
//! - `schema`: composite validator assembly
//! - `required`: requiredness probing
//! - `controller`: value/error state and the submit cycle
//! - `definition`: JSON form definitions

mod controller;
mod definition;
mod error;
mod field;
mod required;
mod schema;
mod validator;

pub use controller::{FormController, FormPhase, SubmissionSink, SubmitOutcome};
pub use definition::{FieldDefinition, FormDefinition, RuleSet, DEFAULT_COLUMNS, MAX_COLUMNS};
pub use error::{FormError, FormResult};
pub use field::{FieldDescriptor, FieldKind, LayoutHint, SelectOption};
pub use required::is_required;
pub use schema::{assemble, CompositeValidator, ErrorMap, ValueMap};
pub use validator::{AnyString, StringSchema, Validator, Violations};

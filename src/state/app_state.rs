//! Application state definitions

use super::forms::{
    FieldDescriptor, FieldKind, FormController, FormDefinition, FormResult, SubmitOutcome,
};
use super::submission::SubmissionLog;

/// Buttons on the action panel, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Reset,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [FormButton::Submit, FormButton::Reset];

    pub fn label(&self) -> &'static str {
        match self {
            FormButton::Submit => "Submit",
            FormButton::Reset => "Reset",
        }
    }
}

/// Everything the UI renders from
#[derive(Debug, Clone)]
pub struct AppState {
    pub title: String,
    /// Grid width of the form
    pub columns: u16,
    pub show_descriptions: bool,
    pub form: FormController,
    pub submissions: SubmissionLog,
    /// Position in the focus order; one past the last field is the action panel
    pub active_form_field: usize,
    pub selected_button: FormButton,
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the state for a form definition
    pub fn from_definition(definition: &FormDefinition) -> FormResult<Self> {
        let form = FormController::new(definition.descriptors()?)?;
        Ok(Self {
            title: definition.title.clone(),
            columns: definition.columns(),
            show_descriptions: true,
            form,
            submissions: SubmissionLog::new(),
            active_form_field: 0,
            selected_button: FormButton::default(),
            status_message: None,
        })
    }

    /// Fields that get a control, in declaration order
    pub fn focusable_fields(&self) -> Vec<&FieldDescriptor> {
        self.form
            .descriptors()
            .iter()
            .filter(|f| f.kind.is_renderable())
            .collect()
    }

    /// Number of focus stops (fields plus the action panel)
    pub fn form_field_count(&self) -> usize {
        self.focusable_fields().len() + 1
    }

    pub fn is_action_panel_focused(&self) -> bool {
        self.active_form_field >= self.focusable_fields().len()
    }

    /// Descriptor of the focused field, if a field has focus
    pub fn active_field(&self) -> Option<&FieldDescriptor> {
        self.focusable_fields().get(self.active_form_field).copied()
    }

    pub fn is_field_active(&self, name: &str) -> bool {
        self.active_field().is_some_and(|f| f.name == name)
    }

    /// Move to next form field
    pub fn next_form_field(&mut self) {
        self.active_form_field = (self.active_form_field + 1) % self.form_field_count();
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        if self.active_form_field == 0 {
            self.active_form_field = self.form_field_count() - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    /// Focus a field by name
    pub fn focus_field(&mut self, name: &str) {
        if let Some(index) = self.focusable_fields().iter().position(|f| f.name == name) {
            self.active_form_field = index;
        }
    }

    pub fn next_button(&mut self) {
        self.selected_button = match self.selected_button {
            FormButton::Submit => FormButton::Reset,
            FormButton::Reset => FormButton::Submit,
        };
    }

    pub fn prev_button(&mut self) {
        // Two buttons: same as next
        self.next_button();
    }

    /// Apply an edit to the focused field's value
    ///
    /// Keys that leave the value unchanged are not edits and keep the field's
    /// errors and the form phase as they are.
    fn edit_active(&mut self, edit: impl FnOnce(&FieldDescriptor, &mut String)) {
        let Some(field) = self.active_field().cloned() else {
            return;
        };
        let current = self.form.value(&field.name).unwrap_or_default();
        let mut value = current.to_string();
        edit(&field, &mut value);
        if value == current {
            return;
        }
        if let Err(e) = self.form.set_field_value(&field.name, value) {
            tracing::error!("Edit on focused field failed: {e}");
        }
    }

    /// Handle character input in form
    ///
    /// Text controls append the character; a select jumps to the next
    /// option whose label starts with it.
    pub fn form_input_char(&mut self, c: char) {
        self.edit_active(|field, value| match field.kind {
            FieldKind::Text | FieldKind::MultilineText => value.push(c),
            FieldKind::SingleSelect => {
                let start = field.option_index(value).map_or(0, |i| i + 1);
                let count = field.options.len();
                let lower = c.to_lowercase().to_string();
                let found = (0..count).map(|i| (start + i) % count).find(|&i| {
                    field.options[i]
                        .label
                        .to_lowercase()
                        .starts_with(lower.as_str())
                });
                if let Some(i) = found {
                    *value = field.options[i].value.clone();
                }
            }
            FieldKind::Unsupported => {}
        });
    }

    /// Handle backspace in form
    pub fn form_backspace(&mut self) {
        self.edit_active(|field, value| match field.kind {
            FieldKind::Text | FieldKind::MultilineText => {
                value.pop();
            }
            FieldKind::SingleSelect => value.clear(),
            FieldKind::Unsupported => {}
        });
    }

    /// Insert a line break into a multiline field
    pub fn form_newline(&mut self) {
        self.edit_active(|field, value| {
            if field.kind == FieldKind::MultilineText {
                value.push('\n');
            }
        });
    }

    /// Step the focused select to the next or previous option (wraps)
    pub fn cycle_option(&mut self, forward: bool) {
        self.edit_active(|field, value| {
            if field.kind != FieldKind::SingleSelect || field.options.is_empty() {
                return;
            }
            let count = field.options.len();
            let next = match (field.option_index(value), forward) {
                (None, true) => 0,
                (None, false) => count - 1,
                (Some(i), true) => (i + 1) % count,
                (Some(i), false) => (i + count - 1) % count,
            };
            *value = field.options[next].value.clone();
        });
    }

    /// Validate and record the form
    ///
    /// On rejection, focus moves to the first failing field.
    pub fn submit_form(&mut self) -> SubmitOutcome {
        let outcome = self.form.submit_to(&mut self.submissions);
        match &outcome {
            SubmitOutcome::Accepted(values) => {
                tracing::info!("Submission accepted with {} field(s)", values.len());
                self.status_message = Some("You submitted the following values".to_string());
            }
            SubmitOutcome::Rejected(errors) => {
                tracing::debug!("Submission rejected: {:?}", errors.keys());
                let first_failing = self
                    .focusable_fields()
                    .iter()
                    .find(|f| errors.contains_key(&f.name))
                    .map(|f| f.name.clone());
                if let Some(name) = first_failing {
                    self.focus_field(&name);
                }
                self.status_message = Some(format!("{} field(s) need attention", errors.len()));
            }
        }
        outcome
    }

    /// Restore initial values
    pub fn reset_form(&mut self) {
        self.form.reset();
        self.active_form_field = 0;
        self.status_message = Some("Form reset".to_string());
    }
}

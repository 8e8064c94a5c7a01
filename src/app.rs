//! Application state and core logic

use crate::state::forms::FieldKind;
use crate::state::{AppState, FormButton};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            quit: false,
            copy_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        self.copy_message = None;

        // Shortcuts that work from anywhere
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Esc => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Char('s') if ctrl => {
                self.state.submit_form();
                return Ok(());
            }
            KeyCode::Char('r') if ctrl => {
                self.state.reset_form();
                return Ok(());
            }
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_last_submission();
                return Ok(());
            }
            KeyCode::Tab => {
                self.state.next_form_field();
                return Ok(());
            }
            KeyCode::BackTab => {
                self.state.prev_form_field();
                return Ok(());
            }
            _ => {}
        }

        if self.state.is_action_panel_focused() {
            self.handle_action_panel_key(key);
        } else {
            self.handle_field_key(key);
        }
        Ok(())
    }

    /// Keys while the action panel has focus
    fn handle_action_panel_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.prev_button(),
            KeyCode::Down | KeyCode::Char('j') => self.state.next_button(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.state.selected_button {
                FormButton::Submit => {
                    self.state.submit_form();
                }
                FormButton::Reset => self.state.reset_form(),
            },
            _ => {}
        }
    }

    /// Keys while a field has focus
    fn handle_field_key(&mut self, key: KeyEvent) {
        // Unbound Ctrl/Alt chords are not input
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return;
        }
        let Some(kind) = self.state.active_field().map(|f| f.kind) else {
            return;
        };

        match (kind, key.code) {
            (FieldKind::SingleSelect, KeyCode::Left | KeyCode::Up) => {
                self.state.cycle_option(false)
            }
            (FieldKind::SingleSelect, KeyCode::Right | KeyCode::Down | KeyCode::Char(' ')) => {
                self.state.cycle_option(true)
            }
            (FieldKind::MultilineText, KeyCode::Enter) => self.state.form_newline(),
            (_, KeyCode::Enter) | (_, KeyCode::Down) => self.state.next_form_field(),
            (_, KeyCode::Up) => self.state.prev_form_field(),
            (_, KeyCode::Backspace) => self.state.form_backspace(),
            (_, KeyCode::Char(c)) => self.state.form_input_char(c),
            _ => {}
        }
    }

    /// Copy the latest submission as JSON
    fn copy_last_submission(&mut self) {
        let Some(json) = self.state.submissions.latest_json() else {
            self.copy_message = Some("Nothing to copy".to_string());
            return;
        };
        match self.copy_to_clipboard(&json) {
            Ok(()) => self.copy_message = Some("Copied submission".to_string()),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {e}");
                self.copy_message = Some("Clipboard unavailable".to_string());
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

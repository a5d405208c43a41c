//! Application state and core logic

use crate::config::FormConfig;
use crate::state::{AppState, Form, FormAction};
use crate::submission::SubmissionHandler;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Collaborator that receives validated profiles
    handler: Box<dyn SubmissionHandler>,
    /// User configuration
    config: FormConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(handler: Box<dyn SubmissionHandler>, config: FormConfig) -> Self {
        Self {
            state: AppState::default(),
            handler,
            config,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        let on_action_row = self.state.form.is_action_row_active();

        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit().await;
            }
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_last_submission();
            }
            KeyCode::Esc => self.quit = true,
            // Up/Down/Left/Right for action row navigation
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right if on_action_row => {
                self.state.form.selected_action.toggle();
            }
            KeyCode::Enter if on_action_row => match self.state.form.selected_action {
                FormAction::Submit => self.submit().await,
                FormAction::Reset => {
                    self.state.form.reset();
                    self.state.status_message = Some("Formulario limpiado".to_string());
                }
            },
            // Select fields step through their options
            KeyCode::Left => self.state.form.cycle_active(false),
            KeyCode::Right => self.state.form.cycle_active(true),
            KeyCode::Down | KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Char(c) => self.state.form.input_char(c),
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Validate the form and hand a valid profile to the submission handler.
    /// Invalid forms never reach the handler.
    pub async fn submit(&mut self) {
        let profile = match self.state.form.submit() {
            Ok(profile) => profile,
            Err(errors) => {
                tracing::debug!(
                    fields = ?errors.fields().collect::<Vec<_>>(),
                    "validation failed"
                );
                self.state.status_message =
                    Some(format!("{} campo(s) requieren atención", errors.len()));
                return;
            }
        };

        match self.handler.submit(&profile).await {
            Ok(submission) => {
                tracing::info!(submission_id = %submission.id, "submission accepted");
                self.state.record_submission(submission);
                self.state.form.reset();
                self.state.status_message = Some("Formulario enviado".to_string());
                if self.config.copy_on_submit() {
                    self.copy_last_submission();
                }
            }
            Err(e) => {
                self.push_error(format!("No se pudo enviar el formulario: {e}"));
            }
        }
    }

    /// Copy the last submitted profile to the clipboard as JSON
    fn copy_last_submission(&mut self) {
        let Some(submission) = self.state.last_submission() else {
            self.state.status_message = Some("Nada enviado todavía".to_string());
            return;
        };
        let result = serde_json::to_string(&submission.profile)
            .map_err(anyhow::Error::from)
            .and_then(|json| self.copy_to_clipboard(&json));
        match result {
            Ok(()) => self.state.status_message = Some("Último envío copiado".to_string()),
            Err(e) => self.push_error(format!("No se pudo copiar: {e}")),
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

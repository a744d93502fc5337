//! # Command System
//!
//! Key events are matched against a list of small commands. The first
//! relevant command turns the key into [`CommandEvent`]s which the
//! controller applies to the ViewModel. Commands only suggest; they never
//! mutate state themselves.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub mod app;
pub mod catalog;
pub mod context;
pub mod dialog;
pub mod events;
pub mod login;

pub use context::CommandContext;
pub use events::CommandEvent;

/// A key binding
pub trait Command: Send + Sync {
    /// Check if this command should handle the given key event
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Produce the events describing the requested change
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Get command name for debugging and logging
    fn name(&self) -> &'static str;
}

/// Ordered collection of commands, first match wins
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create a registry with all default bindings
    pub fn new() -> Self {
        let commands: Vec<Box<dyn Command>> = vec![
            Box::new(app::AppTerminateCommand),
            // Login screen
            Box::new(login::SubmitLoginCommand),
            Box::new(login::SignupCommand),
            Box::new(login::SwitchLoginFieldCommand),
            Box::new(login::LoginBackspaceCommand),
            Box::new(login::LoginInputCommand),
            // Catalog screen
            Box::new(catalog::CreateMakerCommand),
            Box::new(catalog::OpenCreateModelCommand),
            Box::new(catalog::MoveSelectionCommand),
            Box::new(catalog::EditSelectedModelCommand),
            Box::new(app::QuitCommand),
            // Model dialog
            Box::new(dialog::SubmitDialogCommand),
            Box::new(dialog::CloseDialogCommand),
            Box::new(dialog::SwitchDialogFieldCommand),
            Box::new(dialog::CycleMakerCommand),
            Box::new(dialog::DialogBackspaceCommand),
            Box::new(dialog::DialogInputCommand),
        ];
        Self { commands }
    }

    /// Process a key event through the first relevant command
    pub fn process_event(
        &self,
        event: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        match self
            .commands
            .iter()
            .find(|command| command.is_relevant(context, &event))
        {
            Some(command) => {
                tracing::debug!("Key {:?} handled by {}", event.code, command.name());
                command.execute(event, context)
            }
            None => {
                tracing::debug!("No command for key {:?} on {:?}", event.code, context.screen());
                Ok(Vec::new())
            }
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Character typed without Ctrl or Alt
pub(crate) fn plain_char(event: &KeyEvent) -> Option<char> {
    match event.code {
        KeyCode::Char(ch)
            if !event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(ch)
        }
        _ => None,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::CommandContext;
    use crate::repl::events::{DialogField, LoginField, Screen};
    use crate::repl::view_models::{DialogSnapshot, ViewModelSnapshot};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    pub fn context_on(screen: Screen) -> CommandContext {
        let dialog = (screen == Screen::ModelDialog).then(|| DialogSnapshot {
            title: "Create Car Model",
            submit_label: "Create Model",
            maker_label: "Select a car maker".to_string(),
            name: String::new(),
            focused_field: DialogField::Maker,
        });
        CommandContext::new(ViewModelSnapshot {
            screen,
            login_field: LoginField::Email,
            email: String::new(),
            password_len: 0,
            makers: Vec::new(),
            models: Vec::new(),
            selected_model: 0,
            dialog,
            notification: None,
            requests_in_flight: 0,
            terminal_dimensions: (80, 24),
        })
    }

    pub fn dialog_context(field: DialogField) -> CommandContext {
        let mut context = context_on(Screen::ModelDialog);
        if let Some(dialog) = context.state.dialog.as_mut() {
            dialog.focused_field = field;
        }
        context
    }
}

//! # Command Context
//!
//! Read-only state handed to commands when deciding relevance.

use crate::repl::events::{DialogField, Screen};
use crate::repl::view_models::ViewModelSnapshot;

/// Base context available to all commands
pub struct CommandContext {
    pub state: ViewModelSnapshot,
}

impl CommandContext {
    pub fn new(state: ViewModelSnapshot) -> Self {
        Self { state }
    }

    pub fn screen(&self) -> Screen {
        self.state.screen
    }

    /// Focused dialog input, `None` when the dialog is closed
    pub fn dialog_field(&self) -> Option<DialogField> {
        self.state.dialog.as_ref().map(|dialog| dialog.focused_field)
    }
}

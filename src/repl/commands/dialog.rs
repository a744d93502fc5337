//! # Model Dialog Commands

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::{plain_char, Command, CommandContext, CommandEvent};
use crate::repl::events::DialogField;

fn focused(context: &CommandContext, field: DialogField) -> bool {
    context.dialog_field() == Some(field)
}

fn dialog_open(context: &CommandContext) -> bool {
    context.dialog_field().is_some()
}

/// Create or update from the draft (Enter)
pub struct SubmitDialogCommand;

impl Command for SubmitDialogCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        dialog_open(context) && event.code == KeyCode::Enter
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::DialogSubmitRequested])
    }

    fn name(&self) -> &'static str {
        "SubmitDialog"
    }
}

/// Close the dialog (Esc)
pub struct CloseDialogCommand;

impl Command for CloseDialogCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        dialog_open(context) && event.code == KeyCode::Esc
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::DialogCloseRequested])
    }

    fn name(&self) -> &'static str {
        "CloseDialog"
    }
}

/// Move focus between maker and name (Tab, Up, Down)
pub struct SwitchDialogFieldCommand;

impl Command for SwitchDialogFieldCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        dialog_open(context)
            && matches!(
                event.code,
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down
            )
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::DialogFieldSwitchRequested])
    }

    fn name(&self) -> &'static str {
        "SwitchDialogField"
    }
}

/// Step through makers (Left/Right on the maker field)
pub struct CycleMakerCommand;

impl Command for CycleMakerCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        focused(context, DialogField::Maker) && matches!(event.code, KeyCode::Left | KeyCode::Right)
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::DialogMakerCycleRequested {
            forward: event.code == KeyCode::Right,
        }])
    }

    fn name(&self) -> &'static str {
        "CycleMaker"
    }
}

pub struct DialogBackspaceCommand;

impl Command for DialogBackspaceCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        focused(context, DialogField::Name) && event.code == KeyCode::Backspace
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::DialogBackspaceRequested])
    }

    fn name(&self) -> &'static str {
        "DialogBackspace"
    }
}

pub struct DialogInputCommand;

impl Command for DialogInputCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        focused(context, DialogField::Name) && plain_char(event).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(plain_char(&event)
            .map(|ch| vec![CommandEvent::DialogCharRequested { ch }])
            .unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "DialogInput"
    }
}

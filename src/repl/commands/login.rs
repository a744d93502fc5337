//! # Login Screen Commands
//!
//! Editing the credential form and submitting it to login or signup.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{plain_char, Command, CommandContext, CommandEvent};
use crate::repl::events::Screen;

fn on_login(context: &CommandContext) -> bool {
    context.screen() == Screen::Login
}

/// Login (Enter)
pub struct SubmitLoginCommand;

impl Command for SubmitLoginCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        on_login(context) && event.code == KeyCode::Enter
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::LoginRequested])
    }

    fn name(&self) -> &'static str {
        "SubmitLogin"
    }
}

/// Signup (Ctrl+R)
pub struct SignupCommand;

impl Command for SignupCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        on_login(context)
            && matches!(event.code, KeyCode::Char('r'))
            && event.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::SignupRequested])
    }

    fn name(&self) -> &'static str {
        "Signup"
    }
}

/// Move focus between email and password (Tab, Up, Down)
pub struct SwitchLoginFieldCommand;

impl Command for SwitchLoginFieldCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        on_login(context)
            && matches!(
                event.code,
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down
            )
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::LoginFieldSwitchRequested])
    }

    fn name(&self) -> &'static str {
        "SwitchLoginField"
    }
}

pub struct LoginBackspaceCommand;

impl Command for LoginBackspaceCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        on_login(context) && event.code == KeyCode::Backspace
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::LoginBackspaceRequested])
    }

    fn name(&self) -> &'static str {
        "LoginBackspace"
    }
}

pub struct LoginInputCommand;

impl Command for LoginInputCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        on_login(context) && plain_char(event).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(plain_char(&event)
            .map(|ch| vec![CommandEvent::LoginCharRequested { ch }])
            .unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "LoginInput"
    }
}

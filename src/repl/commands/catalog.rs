//! # Catalog Screen Commands

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::{plain_char, Command, CommandContext, CommandEvent};
use crate::repl::events::Screen;

fn on_catalog(context: &CommandContext) -> bool {
    context.screen() == Screen::Catalog
}

/// Create a placeholder maker ('m')
pub struct CreateMakerCommand;

impl Command for CreateMakerCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        on_catalog(context) && plain_char(event) == Some('m')
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::CreateMakerRequested])
    }

    fn name(&self) -> &'static str {
        "CreateMaker"
    }
}

/// Open the dialog in create mode ('n')
pub struct OpenCreateModelCommand;

impl Command for OpenCreateModelCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        on_catalog(context) && plain_char(event) == Some('n')
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::CreateModelDialogRequested])
    }

    fn name(&self) -> &'static str {
        "OpenCreateModel"
    }
}

/// Move the model row selection (Up/Down, k/j)
pub struct MoveSelectionCommand;

impl MoveSelectionCommand {
    fn delta(event: &KeyEvent) -> Option<isize> {
        match event.code {
            KeyCode::Up => Some(-1),
            KeyCode::Down => Some(1),
            _ => match plain_char(event) {
                Some('k') => Some(-1),
                Some('j') => Some(1),
                _ => None,
            },
        }
    }
}

impl Command for MoveSelectionCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        on_catalog(context) && Self::delta(event).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(Self::delta(&event)
            .map(|delta| vec![CommandEvent::ModelSelectionMoveRequested { delta }])
            .unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "MoveSelection"
    }
}

/// Open the dialog on the selected model (Enter)
pub struct EditSelectedModelCommand;

impl Command for EditSelectedModelCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        on_catalog(context) && event.code == KeyCode::Enter
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        if context.state.models.is_empty() {
            return Ok(vec![CommandEvent::NoAction]);
        }
        Ok(vec![CommandEvent::EditModelDialogRequested])
    }

    fn name(&self) -> &'static str {
        "EditSelectedModel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::commands::test_support::{context_on, key};
    use crate::repl::models::{CarModel, RecordId};

    #[test]
    fn m_should_create_maker_on_catalog() {
        let context = context_on(Screen::Catalog);
        let event = key(KeyCode::Char('m'));
        assert!(CreateMakerCommand.is_relevant(&context, &event));
        assert_eq!(
            CreateMakerCommand.execute(event, &context).unwrap(),
            vec![CommandEvent::CreateMakerRequested]
        );
        assert!(!CreateMakerCommand.is_relevant(&context_on(Screen::Login), &event));
    }

    #[test]
    fn n_should_open_create_dialog() {
        let context = context_on(Screen::Catalog);
        assert!(OpenCreateModelCommand.is_relevant(&context, &key(KeyCode::Char('n'))));
    }

    #[test]
    fn vim_keys_should_move_selection() {
        let context = context_on(Screen::Catalog);
        let events = MoveSelectionCommand
            .execute(key(KeyCode::Char('j')), &context)
            .unwrap();
        assert_eq!(
            events,
            vec![CommandEvent::ModelSelectionMoveRequested { delta: 1 }]
        );
        let events = MoveSelectionCommand.execute(key(KeyCode::Up), &context).unwrap();
        assert_eq!(
            events,
            vec![CommandEvent::ModelSelectionMoveRequested { delta: -1 }]
        );
    }

    #[test]
    fn enter_without_models_should_do_nothing() {
        let context = context_on(Screen::Catalog);
        let events = EditSelectedModelCommand
            .execute(key(KeyCode::Enter), &context)
            .unwrap();
        assert_eq!(events, vec![CommandEvent::NoAction]);
    }

    #[test]
    fn enter_with_models_should_open_edit_dialog() {
        let mut context = context_on(Screen::Catalog);
        context.state.models.push(CarModel {
            id: RecordId::Number(5),
            maker_id: RecordId::Number(2),
            name: "Civic".to_string(),
        });
        let events = EditSelectedModelCommand
            .execute(key(KeyCode::Enter), &context)
            .unwrap();
        assert_eq!(events, vec![CommandEvent::EditModelDialogRequested]);
    }
}

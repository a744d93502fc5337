//! # Model Dialog State
//!
//! The create/edit dialog for car models as an explicit tagged state.

use super::catalog::{CarModel, RecordId};

/// Draft values edited inside the dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelDraft {
    pub maker_id: RecordId,
    pub name: String,
}

impl ModelDraft {
    /// Draft prefilled from an existing model
    pub fn from_model(model: &CarModel) -> Self {
        Self {
            maker_id: model.maker_id.clone(),
            name: model.name.clone(),
        }
    }
}

/// Lifecycle of the model dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Creating(ModelDraft),
    Editing(RecordId, ModelDraft),
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::Closed)
    }

    /// Id of the model being edited, `None` while creating or closed
    pub fn edit_model_id(&self) -> Option<&RecordId> {
        match self {
            DialogState::Editing(id, _) => Some(id),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&ModelDraft> {
        match self {
            DialogState::Closed => None,
            DialogState::Creating(draft) | DialogState::Editing(_, draft) => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut ModelDraft> {
        match self {
            DialogState::Closed => None,
            DialogState::Creating(draft) | DialogState::Editing(_, draft) => Some(draft),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DialogState::Editing(..) => "Edit Car Model",
            _ => "Create Car Model",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            DialogState::Editing(..) => "Update Model",
            _ => "Create Model",
        }
    }
}

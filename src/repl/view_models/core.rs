//! # Core ViewModel Structure
//!
//! The single owner of application state: session, cached catalog lists,
//! the model dialog, form focus and the current notification. User intents
//! are turned into [`ApiRequest`]s here; the controller dispatches them.

use crate::repl::events::{DialogField, LoginField, Screen};
use crate::repl::models::{
    CarMaker, CarModel, DialogState, ModelDraft, Notification, RecordId, Session,
};
use crate::repl::services::{ApiRequest, Credentials, ModelPayload, RequestTicket};
use std::time::Instant;

/// Central application state
#[derive(Debug, Clone)]
pub struct ViewModel {
    pub(super) session: Session,
    pub(super) login_field: LoginField,
    pub(super) makers: Vec<CarMaker>,
    pub(super) models: Vec<CarModel>,
    /// Ticket of the last list response applied, per collection
    pub(super) makers_ticket: Option<RequestTicket>,
    pub(super) models_ticket: Option<RequestTicket>,
    pub(super) selected_model: usize,
    pub(super) dialog: DialogState,
    pub(super) dialog_field: DialogField,
    pub(super) notification: Option<Notification>,
    pub(super) requests_in_flight: usize,
    pub(super) terminal_size: (u16, u16),
}

impl ViewModel {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            login_field: LoginField::default(),
            makers: Vec::new(),
            models: Vec::new(),
            makers_ticket: None,
            models_ticket: None,
            selected_model: 0,
            dialog: DialogState::Closed,
            dialog_field: DialogField::default(),
            notification: None,
            requests_in_flight: 0,
            terminal_size: (80, 24),
        }
    }

    pub fn screen(&self) -> Screen {
        if !self.session.is_logged_in() {
            Screen::Login
        } else if self.dialog.is_open() {
            Screen::ModelDialog
        } else {
            Screen::Catalog
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    pub fn makers(&self) -> &[CarMaker] {
        &self.makers
    }

    pub fn models(&self) -> &[CarModel] {
        &self.models
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    pub fn edit_model_id(&self) -> Option<&RecordId> {
        self.dialog.edit_model_id()
    }

    pub fn login_field(&self) -> LoginField {
        self.login_field
    }

    pub fn dialog_field(&self) -> DialogField {
        self.dialog_field
    }

    pub fn selected_model(&self) -> usize {
        self.selected_model
    }

    /// Latest notification, if it has not expired yet
    pub fn active_notification(&self, now: Instant) -> Option<&Notification> {
        self.notification.as_ref().filter(|n| !n.is_expired(now))
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn notify(&mut self, notification: Notification) {
        tracing::info!("Notification: {}", notification.text());
        self.notification = Some(notification);
    }

    pub fn requests_in_flight(&self) -> usize {
        self.requests_in_flight
    }

    pub fn set_requests_in_flight(&mut self, count: usize) {
        self.requests_in_flight = count;
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    // Login form

    pub fn switch_login_field(&mut self) {
        self.login_field = self.login_field.next();
    }

    pub fn insert_login_char(&mut self, ch: char) {
        self.login_input_mut().push(ch);
    }

    pub fn backspace_login(&mut self) {
        self.login_input_mut().pop();
    }

    fn login_input_mut(&mut self) -> &mut String {
        match self.login_field {
            LoginField::Email => self.session.email_mut(),
            LoginField::Password => self.session.password_mut(),
        }
    }

    fn credentials(&self) -> Credentials {
        Credentials {
            email: self.session.email().to_string(),
            password: self.session.password().to_string(),
        }
    }

    pub fn login_request(&self) -> ApiRequest {
        ApiRequest::Login(self.credentials())
    }

    pub fn signup_request(&self) -> ApiRequest {
        ApiRequest::Signup(self.credentials())
    }

    // Catalog

    /// Request creating a placeholder maker; `None` while logged out
    pub fn create_maker_request(&self) -> Option<ApiRequest> {
        if !self.session.is_logged_in() {
            tracing::warn!("Ignoring create maker request while logged out");
            return None;
        }
        Some(ApiRequest::CreateMaker {
            access_token: self.session.access_token().to_string(),
        })
    }

    pub fn move_model_selection(&mut self, delta: isize) {
        if self.models.is_empty() {
            self.selected_model = 0;
            return;
        }
        let last = self.models.len() - 1;
        self.selected_model = self.selected_model.saturating_add_signed(delta).min(last);
    }

    // Model dialog

    pub fn open_create_dialog(&mut self) {
        self.dialog = DialogState::Creating(ModelDraft::default());
        self.dialog_field = DialogField::default();
    }

    /// Open the dialog on the currently selected model row
    pub fn open_edit_dialog(&mut self) -> bool {
        let Some(model) = self.models.get(self.selected_model) else {
            return false;
        };
        self.dialog = DialogState::Editing(model.id.clone(), ModelDraft::from_model(model));
        self.dialog_field = DialogField::default();
        true
    }

    pub fn close_dialog(&mut self) {
        self.dialog = DialogState::Closed;
        self.dialog_field = DialogField::default();
    }

    pub fn switch_dialog_field(&mut self) {
        self.dialog_field = self.dialog_field.next();
    }

    pub fn insert_dialog_char(&mut self, ch: char) {
        if let Some(draft) = self.dialog.draft_mut() {
            draft.name.push(ch);
        }
    }

    pub fn backspace_dialog(&mut self) {
        if let Some(draft) = self.dialog.draft_mut() {
            draft.name.pop();
        }
    }

    /// Step through "no maker" followed by every cached maker
    pub fn cycle_dialog_maker(&mut self, forward: bool) {
        let options: Vec<RecordId> = std::iter::once(RecordId::empty())
            .chain(self.makers.iter().map(|maker| maker.id.clone()))
            .collect();
        let Some(draft) = self.dialog.draft_mut() else {
            return;
        };
        let current = options
            .iter()
            .position(|id| id.refers_to(&draft.maker_id))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };
        draft.maker_id = options[next].clone();
    }

    /// Name shown for the draft's maker selection
    pub fn dialog_maker_label(&self) -> Option<String> {
        let draft = self.dialog.draft()?;
        if draft.maker_id.is_empty() {
            return Some("Select a car maker".to_string());
        }
        let label = self
            .makers
            .iter()
            .find(|maker| maker.id.refers_to(&draft.maker_id))
            .map(|maker| maker.name.clone())
            .unwrap_or_else(|| draft.maker_id.to_string());
        Some(label)
    }

    /// Request for the dialog's submit action, create or update by state
    ///
    /// The draft is sent as-is: an empty maker or name is left for the
    /// server to reject.
    pub fn submit_dialog_request(&self) -> Option<ApiRequest> {
        let access_token = self.session.access_token().to_string();
        match &self.dialog {
            DialogState::Closed => None,
            DialogState::Creating(draft) => Some(ApiRequest::CreateModel {
                access_token,
                payload: payload_from(draft),
            }),
            DialogState::Editing(id, draft) => Some(ApiRequest::UpdateModel {
                access_token,
                id: id.clone(),
                payload: payload_from(draft),
            }),
        }
    }
}

fn payload_from(draft: &ModelDraft) -> ModelPayload {
    ModelPayload {
        maker_id: draft.maker_id.clone(),
        name: draft.name.clone(),
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}

//! # ViewModel Snapshot
//!
//! Immutable copy of everything the renderer and the command layer need.
//! Views never borrow the live ViewModel.

use super::core::ViewModel;
use crate::repl::events::{DialogField, LoginField, Screen};
use crate::repl::models::{CarMaker, CarModel, Notification};
use std::time::Instant;

/// State of the open model dialog as shown on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogSnapshot {
    pub title: &'static str,
    pub submit_label: &'static str,
    pub maker_label: String,
    pub name: String,
    pub focused_field: DialogField,
}

/// Read-only snapshot of ViewModel state
#[derive(Debug, Clone)]
pub struct ViewModelSnapshot {
    pub screen: Screen,
    pub login_field: LoginField,
    pub email: String,
    /// Password length only, the text itself never leaves the session
    pub password_len: usize,
    pub makers: Vec<CarMaker>,
    pub models: Vec<CarModel>,
    pub selected_model: usize,
    pub dialog: Option<DialogSnapshot>,
    pub notification: Option<Notification>,
    pub requests_in_flight: usize,
    pub terminal_dimensions: (u16, u16),
}

impl ViewModelSnapshot {
    /// Create snapshot from current ViewModel state
    pub fn from_view_model(view_model: &ViewModel) -> Self {
        Self::at(view_model, Instant::now())
    }

    /// Snapshot with notifications evaluated at `now`
    pub fn at(view_model: &ViewModel, now: Instant) -> Self {
        let session = view_model.session();
        let dialog = view_model.dialog().draft().map(|draft| DialogSnapshot {
            title: view_model.dialog().title(),
            submit_label: view_model.dialog().submit_label(),
            maker_label: view_model.dialog_maker_label().unwrap_or_default(),
            name: draft.name.clone(),
            focused_field: view_model.dialog_field(),
        });

        Self {
            screen: view_model.screen(),
            login_field: view_model.login_field(),
            email: session.email().to_string(),
            password_len: session.password().chars().count(),
            makers: view_model.makers().to_vec(),
            models: view_model.models().to_vec(),
            selected_model: view_model.selected_model(),
            dialog,
            notification: view_model.active_notification(now).cloned(),
            requests_in_flight: view_model.requests_in_flight(),
            terminal_dimensions: view_model.terminal_size(),
        }
    }
}

//! # Response Reconciliation
//!
//! Applies settled requests to the ViewModel. Writes never touch the cached
//! lists directly; a successful write asks for a fresh GET instead.

use super::core::ViewModel;
use crate::repl::models::Notification;
use crate::repl::services::{ApiRequest, ApiResult, Reply, RequestTicket};

impl ViewModel {
    /// Apply a server answer and return the follow-up requests to dispatch
    pub fn apply_response(&mut self, ticket: RequestTicket, result: ApiResult) -> Vec<ApiRequest> {
        match result {
            ApiResult::LoggedIn(Reply::Accepted(body)) => {
                self.session.establish(body.access_token);
                self.notify(Notification::success("Login Successful"));
                Vec::new()
            }
            ApiResult::LoggedIn(Reply::Rejected { body, .. }) => {
                self.notify(Notification::error("Login Failed").with_description(body));
                Vec::new()
            }
            ApiResult::SignedUp(Reply::Accepted(())) => {
                self.notify(
                    Notification::success("Signup Successful")
                        .with_description("You can now login with your credentials"),
                );
                Vec::new()
            }
            ApiResult::SignedUp(Reply::Rejected { body, .. }) => {
                self.notify(Notification::error("Signup Failed").with_description(body));
                Vec::new()
            }
            ApiResult::Makers(Reply::Accepted(makers)) => {
                if is_stale(self.makers_ticket, ticket) {
                    tracing::debug!("Discarding stale maker list (ticket {})", ticket.value());
                } else {
                    tracing::debug!("Loaded {} car makers", makers.len());
                    self.makers = makers;
                    self.makers_ticket = Some(ticket);
                }
                Vec::new()
            }
            ApiResult::Models(Reply::Accepted(models)) => {
                if is_stale(self.models_ticket, ticket) {
                    tracing::debug!("Discarding stale model list (ticket {})", ticket.value());
                } else {
                    tracing::debug!("Loaded {} car models", models.len());
                    self.models = models;
                    self.models_ticket = Some(ticket);
                    self.move_model_selection(0);
                }
                Vec::new()
            }
            ApiResult::Makers(Reply::Rejected { status, body })
            | ApiResult::Models(Reply::Rejected { status, body }) => {
                tracing::error!("Error fetching catalog list: HTTP {status}: {body}");
                Vec::new()
            }
            ApiResult::MakerCreated(Reply::Accepted(())) => {
                self.notify(Notification::success("Car Maker Created"));
                vec![ApiRequest::ListMakers]
            }
            ApiResult::MakerCreated(Reply::Rejected { .. }) => {
                self.notify(Notification::error("Failed to Create Car Maker"));
                Vec::new()
            }
            ApiResult::ModelCreated(Reply::Accepted(())) => {
                self.close_dialog();
                self.notify(Notification::success("Car Model Created"));
                vec![ApiRequest::ListModels]
            }
            ApiResult::ModelCreated(Reply::Rejected { .. }) => {
                self.notify(Notification::error("Failed to Create Car Model"));
                Vec::new()
            }
            ApiResult::ModelUpdated(Reply::Accepted(())) => {
                self.close_dialog();
                self.notify(Notification::success("Car Model Updated"));
                vec![ApiRequest::ListModels]
            }
            ApiResult::ModelUpdated(Reply::Rejected { .. }) => {
                self.notify(Notification::error("Failed to Update Car Model"));
                Vec::new()
            }
        }
    }

    /// Record a request that never produced an answer
    ///
    /// Only logged: the user gets no notification and state is unchanged.
    pub fn apply_transport_error(&mut self, label: &str, message: &str) {
        tracing::error!("Error during {label}: {message}");
    }
}

fn is_stale(applied: Option<RequestTicket>, incoming: RequestTicket) -> bool {
    applied.is_some_and(|applied| incoming <= applied)
}

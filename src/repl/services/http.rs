//! # HTTP Service
//!
//! Fire-and-forget request dispatch. Each request runs in its own tokio task
//! and reports back through a channel that the controller drains from its
//! event loop, so completions are applied one at a time on the loop.

use super::api::{ApiClient, Credentials, LoginResponse, ModelPayload, Reply};
use crate::repl::models::{CarMaker, CarModel, RecordId};
use anyhow::Result;
use tokio::sync::mpsc;

/// Monotonic id handed out for every dispatched request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(pub u64);

impl RequestTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A request against the catalog backend
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    Login(Credentials),
    Signup(Credentials),
    ListMakers,
    ListModels,
    CreateMaker {
        access_token: String,
    },
    CreateModel {
        access_token: String,
        payload: ModelPayload,
    },
    UpdateModel {
        access_token: String,
        id: RecordId,
        payload: ModelPayload,
    },
}

impl ApiRequest {
    /// Short description used in logs
    pub fn label(&self) -> String {
        match self {
            ApiRequest::Login(_) => "login".to_string(),
            ApiRequest::Signup(_) => "signup".to_string(),
            ApiRequest::ListMakers => "list car makers".to_string(),
            ApiRequest::ListModels => "list car models".to_string(),
            ApiRequest::CreateMaker { .. } => "create car maker".to_string(),
            ApiRequest::CreateModel { .. } => "create car model".to_string(),
            ApiRequest::UpdateModel { id, .. } => format!("update car model {id}"),
        }
    }
}

/// Server answer, tagged with the kind of request it belongs to
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult {
    LoggedIn(Reply<LoginResponse>),
    SignedUp(Reply<()>),
    Makers(Reply<Vec<CarMaker>>),
    Models(Reply<Vec<CarModel>>),
    MakerCreated(Reply<()>),
    ModelCreated(Reply<()>),
    ModelUpdated(Reply<()>),
}

/// Message type for async HTTP response handling
#[derive(Debug)]
pub enum HttpResponseMessage {
    /// The server answered (any status)
    Success {
        ticket: RequestTicket,
        result: ApiResult,
    },
    /// The exchange failed before an answer could be read
    Error {
        ticket: RequestTicket,
        label: String,
        message: String,
    },
}

impl HttpResponseMessage {
    pub fn ticket(&self) -> RequestTicket {
        match self {
            HttpResponseMessage::Success { ticket, .. } | HttpResponseMessage::Error { ticket, .. } => {
                *ticket
            }
        }
    }
}

/// Service for dispatching catalog requests
pub struct HttpService {
    client: ApiClient,
    next_ticket: u64,
    in_flight: usize,
    response_receiver: mpsc::Receiver<HttpResponseMessage>,
    response_sender: mpsc::Sender<HttpResponseMessage>,
}

impl HttpService {
    pub fn new(client: ApiClient) -> Self {
        let (response_sender, response_receiver) = mpsc::channel(32);
        Self {
            client,
            next_ticket: 0,
            in_flight: 0,
            response_receiver,
            response_sender,
        }
    }

    /// Number of dispatched requests whose message has not been taken yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Run a request to completion on the current task
    pub async fn execute(client: &ApiClient, request: ApiRequest) -> Result<ApiResult> {
        let result = match request {
            ApiRequest::Login(credentials) => ApiResult::LoggedIn(client.login(&credentials).await?),
            ApiRequest::Signup(credentials) => {
                ApiResult::SignedUp(client.signup(&credentials).await?)
            }
            ApiRequest::ListMakers => ApiResult::Makers(client.list_makers().await?),
            ApiRequest::ListModels => ApiResult::Models(client.list_models().await?),
            ApiRequest::CreateMaker { access_token } => {
                ApiResult::MakerCreated(client.create_maker(&access_token).await?)
            }
            ApiRequest::CreateModel {
                access_token,
                payload,
            } => ApiResult::ModelCreated(client.create_model(&access_token, &payload).await?),
            ApiRequest::UpdateModel {
                access_token,
                id,
                payload,
            } => ApiResult::ModelUpdated(client.update_model(&access_token, &id, &payload).await?),
        };
        Ok(result)
    }

    /// Execute a request asynchronously
    ///
    /// Spawns a tokio task and returns immediately. The outcome arrives later
    /// through [`poll_response`](Self::poll_response) or
    /// [`next_response`](Self::next_response). Nothing is de-duplicated:
    /// dispatching the same request twice sends it twice.
    pub fn dispatch(&mut self, request: ApiRequest) -> RequestTicket {
        self.next_ticket += 1;
        let ticket = RequestTicket(self.next_ticket);
        self.in_flight += 1;

        let client = self.client.clone();
        let result_sender = self.response_sender.clone();
        let label = request.label();
        tracing::debug!("Dispatching {label} as ticket {}", ticket.value());

        tokio::spawn(async move {
            let message = match Self::execute(&client, request).await {
                Ok(result) => HttpResponseMessage::Success { ticket, result },
                Err(e) => {
                    // Show full error chain using anyhow's chain iterator
                    let mut message = format!("{e}");
                    for cause in e.chain().skip(1) {
                        message.push_str(&format!("\n  Caused by: {cause}"));
                    }
                    HttpResponseMessage::Error {
                        ticket,
                        label,
                        message,
                    }
                }
            };

            // Receiver is gone only when the app is shutting down
            let _ = result_sender.send(message).await;
        });

        ticket
    }

    /// Take a completed response without blocking
    pub fn poll_response(&mut self) -> Option<HttpResponseMessage> {
        let message = self.response_receiver.try_recv().ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(message)
    }

    /// Wait for the next completed response, `None` when nothing is in flight
    pub async fn next_response(&mut self) -> Option<HttpResponseMessage> {
        if self.in_flight == 0 {
            return None;
        }
        let message = self.response_receiver.recv().await?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(message)
    }
}

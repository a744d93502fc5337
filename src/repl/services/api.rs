//! # Catalog API Client
//!
//! Typed wrappers around the backend's REST endpoints. Every call returns
//! `Ok(Reply)` once a response has been received, whatever its status, and
//! `Err` only when the exchange itself failed (connection, body decoding).

use crate::repl::models::{CarMaker, CarModel, RecordId};
use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Name given to every maker created from the catalog screen
pub const PLACEHOLDER_MAKER_NAME: &str = "New Car Maker";

/// Outcome of a request that reached the server
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    /// 2xx response with its decoded body
    Accepted(T),
    /// Any other status, with the raw response text
    Rejected { status: u16, body: String },
}

/// Body of `/login` and `/signup`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful `/login` body
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MakerPayload {
    pub name: String,
}

/// Body of model create and update calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelPayload {
    pub maker_id: RecordId,
    pub name: String,
}

/// Client for the car catalog backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client rooted at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim_end_matches('/');
        let base_url =
            Url::parse(trimmed).with_context(|| format!("Invalid server URL '{base_url}'"))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Server URL '{trimmed}' cannot be used as a base");
        }
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        tracing::debug!("ApiClient created for {}", base_url);
        Ok(Self { client, base_url })
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<Reply<LoginResponse>> {
        let request = self
            .client
            .post(self.endpoint(&["login"]))
            .json(credentials);
        read_json(send(request, "POST /login").await?).await
    }

    pub async fn signup(&self, credentials: &Credentials) -> Result<Reply<()>> {
        let request = self
            .client
            .post(self.endpoint(&["signup"]))
            .json(credentials);
        read_status(send(request, "POST /signup").await?).await
    }

    pub async fn list_makers(&self) -> Result<Reply<Vec<CarMaker>>> {
        let request = self.client.get(self.endpoint(&["car-makers"]));
        read_json(send(request, "GET /car-makers").await?).await
    }

    pub async fn list_models(&self) -> Result<Reply<Vec<CarModel>>> {
        let request = self.client.get(self.endpoint(&["car-models"]));
        read_json(send(request, "GET /car-models").await?).await
    }

    /// Create a maker named [`PLACEHOLDER_MAKER_NAME`]
    pub async fn create_maker(&self, access_token: &str) -> Result<Reply<()>> {
        let payload = MakerPayload {
            name: PLACEHOLDER_MAKER_NAME.to_string(),
        };
        let request = self
            .client
            .post(self.endpoint(&["car-makers"]))
            .bearer_auth(access_token)
            .json(&payload);
        read_status(send(request, "POST /car-makers").await?).await
    }

    pub async fn create_model(
        &self,
        access_token: &str,
        payload: &ModelPayload,
    ) -> Result<Reply<()>> {
        let request = self
            .client
            .post(self.endpoint(&["car-models"]))
            .bearer_auth(access_token)
            .json(payload);
        read_status(send(request, "POST /car-models").await?).await
    }

    pub async fn update_model(
        &self,
        access_token: &str,
        id: &RecordId,
        payload: &ModelPayload,
    ) -> Result<Reply<()>> {
        let id = id.to_string();
        let request = self
            .client
            .put(self.endpoint(&["car-models", &id]))
            .bearer_auth(access_token)
            .json(payload);
        read_status(send(request, &format!("PUT /car-models/{id}")).await?).await
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // new() rejects cannot-be-a-base URLs, so segments are always available
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

async fn send(request: RequestBuilder, label: &str) -> Result<Response> {
    tracing::debug!("Sending {label}");
    let response = request
        .send()
        .await
        .with_context(|| format!("{label} failed"))?;
    tracing::debug!("{label} answered {}", response.status());
    Ok(response)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<Reply<T>> {
    if response.status().is_success() {
        let body = response
            .json::<T>()
            .await
            .context("Failed to decode response body")?;
        Ok(Reply::Accepted(body))
    } else {
        rejected(response).await
    }
}

async fn read_status(response: Response) -> Result<Reply<()>> {
    if response.status().is_success() {
        Ok(Reply::Accepted(()))
    } else {
        rejected(response).await
    }
}

async fn rejected<T>(response: Response) -> Result<Reply<T>> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .context("Failed to read error response body")?;
    Ok(Reply::Rejected { status, body })
}

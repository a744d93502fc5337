//! # Services Layer
//!
//! Everything that talks to the backend. `api` knows the endpoints,
//! `http` runs requests in the background and hands results back to the
//! controller.

pub mod api;
pub mod http;

pub use api::{
    ApiClient, Credentials, LoginResponse, MakerPayload, ModelPayload, Reply,
    PLACEHOLDER_MAKER_NAME,
};
pub use http::{ApiRequest, ApiResult, HttpResponseMessage, HttpService, RequestTicket};

//! # Carline - Terminal Client for a Car Catalog Backend
//!
//! Log in, browse car makers and car models, create makers and create or
//! edit models against a small REST backend.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  Snapshot  ┌──────────────┐   Requests   ┌─────────────┐
//! │    View     │◄───────────│  ViewModel   │─────────────▶│ HttpService │
//! │             │            │              │◄─────────────│             │
//! │ - Layout    │            │ - Session    │   Responses  │ - ApiClient │
//! │ - Terminal  │            │ - Catalog    │              │ - Tickets   │
//! └─────────────┘            │ - Dialog     │              └─────────────┘
//!                            └──────────────┘
//!                                    ▲
//!                                    │ Command events
//!                                    ▼
//!                             ┌──────────────┐
//!                             │  Controller  │
//!                             │ - Event loop │
//!                             └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod repl;

pub use repl::*;

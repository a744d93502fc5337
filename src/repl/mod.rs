//! # Application Layers
//!
//! Models, view model, services, commands, controller, views and the I/O
//! seam they run on.

pub mod commands;
pub mod controllers;
pub mod events;
pub mod io;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

pub use controllers::AppController;
pub use io::{EventStream, RenderStream, TerminalEventStream, TerminalRenderStream};
pub use view_models::{ViewModel, ViewModelSnapshot};

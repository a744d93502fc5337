//! # Controllers Module
//!
//! Contains the controller that drives the event loop.

pub mod app_controller;

pub use app_controller::AppController;

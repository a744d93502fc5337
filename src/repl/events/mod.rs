//! # Events Module
//!
//! Shared state enums used across the MVVM layers.

pub mod types;

pub use types::{DialogField, LoginField, Screen};

//! # ViewModel Module
//!
//! Application state and the rules for changing it. `core` holds the state
//! and user intents, `responses` folds server answers back in, and
//! `snapshot` produces the immutable view handed to rendering.

pub mod core;
pub mod responses;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use self::core::ViewModel;
pub use snapshot::{DialogSnapshot, ViewModelSnapshot};

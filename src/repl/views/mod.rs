//! # Views Module
//!
//! Layout composition and terminal rendering.

pub mod layout;
pub mod terminal_renderer;

pub use layout::{compose_lines, status_line, LineStyle, StyledLine};
pub use terminal_renderer::{TerminalRenderer, ViewRenderer};

//! # Terminal I/O
//!
//! The controller reads keys through [`EventStream`] and draws through
//! [`RenderStream`]. `terminal` talks to the real tty via crossterm; `mock`
//! replays scripted keys and records frames for tests.

use anyhow::Result;
use crossterm::event::Event;
use std::io::Write;
use std::time::Duration;

pub mod mock;
pub mod terminal;

pub use mock::{MockEventStream, MockRenderStream, RenderCommand, RenderRecorder};
pub use terminal::{TerminalEventStream, TerminalRenderStream};

/// Source of key and resize events
pub trait EventStream: Send {
    /// True when an event can be read without blocking past `timeout`
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Next event; call only after `poll` said one is ready
    fn read(&mut self) -> Result<Event>;
}

/// Sink for a carline frame plus the terminal mode switches around it
pub trait RenderStream: Write + Send {
    fn clear_screen(&mut self) -> Result<()>;

    /// Column first, then row
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    fn hide_cursor(&mut self) -> Result<()>;

    fn show_cursor(&mut self) -> Result<()>;

    /// (width, height) in cells
    fn get_size(&self) -> Result<(u16, u16)>;

    fn enter_alternate_screen(&mut self) -> Result<()>;

    fn leave_alternate_screen(&mut self) -> Result<()>;

    fn enable_raw_mode(&mut self) -> Result<()>;

    fn disable_raw_mode(&mut self) -> Result<()>;
}

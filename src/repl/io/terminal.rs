//! Crossterm-backed streams used by the `carline` binary.

use super::{EventStream, RenderStream};
use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use std::io::{self, Stdout, Write};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct TerminalEventStream;

impl TerminalEventStream {
    pub fn new() -> Self {
        Self
    }
}

impl EventStream for TerminalEventStream {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        Ok(event::poll(timeout)?)
    }

    fn read(&mut self) -> Result<Event> {
        Ok(event::read()?)
    }
}

/// Draws on stdout; raw mode and the alternate screen apply to the whole tty
pub struct TerminalRenderStream {
    stdout: Stdout,
}

impl TerminalRenderStream {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for TerminalRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for TerminalRenderStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl RenderStream for TerminalRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        Ok(execute!(self.stdout, Clear(ClearType::All))?)
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        Ok(execute!(self.stdout, cursor::MoveTo(x, y))?)
    }

    fn hide_cursor(&mut self) -> Result<()> {
        Ok(execute!(self.stdout, cursor::Hide)?)
    }

    fn show_cursor(&mut self) -> Result<()> {
        Ok(execute!(self.stdout, cursor::Show)?)
    }

    fn get_size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        Ok(execute!(self.stdout, EnterAlternateScreen)?)
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        Ok(execute!(self.stdout, LeaveAlternateScreen)?)
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        Ok(terminal::enable_raw_mode()?)
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        Ok(terminal::disable_raw_mode()?)
    }
}

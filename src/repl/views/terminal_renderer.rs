//! # Terminal Renderer
//!
//! Draws a [`ViewModelSnapshot`] onto a [`RenderStream`]. Every frame is a
//! full redraw: the screen is small and changes only on input or when a
//! response lands.

use super::layout::{compose_lines, status_line, LineStyle};
use crate::repl::io::RenderStream;
use crate::repl::models::NotificationLevel;
use crate::repl::view_models::ViewModelSnapshot;
use anyhow::Result;
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::Write;

// Helper macro to convert crossterm errors to anyhow errors
macro_rules! queue_term {
    ($($arg:expr),* $(,)?) => {
        queue!($($arg),*).map_err(anyhow::Error::from)
    };
}

/// Trait for rendering views
pub trait ViewRenderer {
    /// Initialize the terminal for rendering
    fn initialize(&mut self) -> Result<()>;

    /// Render the full application state
    fn render_full(&mut self, snapshot: &ViewModelSnapshot) -> Result<()>;

    /// Restore the terminal on exit
    fn cleanup(&mut self) -> Result<()>;
}

/// Crossterm renderer over an injected render stream
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    terminal_size: (u16, u16),
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.get_size()?;
        Ok(Self {
            render_stream,
            terminal_size,
        })
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    fn write_styled(&mut self, text: &str, style: LineStyle) -> Result<()> {
        let out = &mut self.render_stream;
        match style {
            LineStyle::Title => {
                queue_term!(out, SetAttribute(Attribute::Bold), SetForegroundColor(Color::Cyan))?
            }
            LineStyle::Heading => queue_term!(out, SetAttribute(Attribute::Bold))?,
            LineStyle::Selected => queue_term!(out, SetAttribute(Attribute::Reverse))?,
            LineStyle::Focused => queue_term!(out, SetForegroundColor(Color::Yellow))?,
            LineStyle::Hint | LineStyle::Dim => {
                queue_term!(out, SetForegroundColor(Color::DarkGrey))?
            }
            LineStyle::Plain => {}
        }
        queue_term!(
            out,
            Print(text),
            SetAttribute(Attribute::Reset),
            ResetColor
        )
    }

    fn render_status_bar(&mut self, snapshot: &ViewModelSnapshot) -> Result<()> {
        let (width, height) = self.terminal_size;
        let (text, level) = status_line(snapshot, width as usize);
        let color = match level {
            Some(NotificationLevel::Success) => Color::Green,
            Some(NotificationLevel::Error) => Color::Red,
            None => Color::DarkGrey,
        };

        self.render_stream.move_cursor(0, height.saturating_sub(1))?;
        queue_term!(
            self.render_stream,
            SetForegroundColor(color),
            Print(text),
            ResetColor
        )
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.enable_raw_mode()?;
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()
    }

    fn render_full(&mut self, snapshot: &ViewModelSnapshot) -> Result<()> {
        let (width, height) = self.terminal_size;
        // Last row belongs to the status bar
        let body_rows = height.saturating_sub(1) as usize;

        self.render_stream.clear_screen()?;
        let lines = compose_lines(snapshot, width as usize);
        for (row, line) in lines.iter().take(body_rows).enumerate() {
            self.render_stream.move_cursor(0, row as u16)?;
            self.write_styled(&line.text, line.style)?;
        }
        self.render_status_bar(snapshot)?;

        self.render_stream.flush()?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        self.render_stream.show_cursor()?;
        self.render_stream.leave_alternate_screen()?;
        self.render_stream.disable_raw_mode()
    }
}

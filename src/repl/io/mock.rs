//! # Mock I/O Implementations for Testing
//!
//! In-memory event and render streams. The render stream shares its log
//! through a [`RenderRecorder`] so tests can inspect output after handing
//! the stream to the controller.

use super::{EventStream, RenderStream};
use anyhow::Result;
use crossterm::event::Event;
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Pre-programmed input events
#[derive(Debug, Default)]
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available"))
    }
}

/// Recorded render command for verification
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ClearScreen,
    MoveCursor(u16, u16),
    HideCursor,
    ShowCursor,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    Write(Vec<u8>),
    Flush,
}

#[derive(Debug, Default)]
struct RenderLog {
    commands: Vec<RenderCommand>,
    /// Bytes written since the last clear, i.e. the current frame
    frame: Vec<u8>,
}

/// Shared view of everything a [`MockRenderStream`] received
#[derive(Debug, Clone, Default)]
pub struct RenderRecorder {
    log: Arc<Mutex<RenderLog>>,
}

impl RenderRecorder {
    fn lock(&self) -> MutexGuard<'_, RenderLog> {
        // A poisoned log only means another test thread panicked mid-write
        self.log.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, command: RenderCommand) {
        self.lock().commands.push(command);
    }

    pub fn get_commands(&self) -> Vec<RenderCommand> {
        self.lock().commands.clone()
    }

    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.lock().commands.contains(command)
    }

    /// Text of the most recent frame, escape sequences included
    pub fn frame_text(&self) -> String {
        String::from_utf8_lossy(&self.lock().frame).to_string()
    }
}

/// Render stream that records instead of drawing
pub struct MockRenderStream {
    recorder: RenderRecorder,
    terminal_size: (u16, u16),
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    pub fn with_size(size: (u16, u16)) -> Self {
        Self {
            recorder: RenderRecorder::default(),
            terminal_size: size,
        }
    }

    /// Handle that stays valid after the stream is moved
    pub fn recorder(&self) -> RenderRecorder {
        self.recorder.clone()
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut log = self.recorder.lock();
        log.frame.extend_from_slice(buf);
        log.commands.push(RenderCommand::Write(buf.to_vec()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.recorder.record(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        let mut log = self.recorder.lock();
        log.frame.clear();
        log.commands.push(RenderCommand::ClearScreen);
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.recorder.record(RenderCommand::MoveCursor(x, y));
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.recorder.record(RenderCommand::HideCursor);
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.recorder.record(RenderCommand::ShowCursor);
        Ok(())
    }

    fn get_size(&self) -> Result<(u16, u16)> {
        Ok(self.terminal_size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        self.recorder.record(RenderCommand::EnterAlternateScreen);
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        self.recorder.record(RenderCommand::LeaveAlternateScreen);
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        self.recorder.record(RenderCommand::EnableRawMode);
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        self.recorder.record(RenderCommand::DisableRawMode);
        Ok(())
    }
}

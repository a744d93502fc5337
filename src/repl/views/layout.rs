//! # Screen Layout
//!
//! Turns a [`ViewModelSnapshot`] into styled text rows. Kept free of any
//! terminal I/O so the layout can be asserted on directly.

use crate::repl::events::{DialogField, LoginField, Screen};
use crate::repl::models::{CarMaker, NotificationLevel, RecordId};
use crate::repl::view_models::{DialogSnapshot, ViewModelSnapshot};
use unicode_width::UnicodeWidthChar;

pub const APP_TITLE: &str = "Carline";
pub const MAKERS_HEADING: &str = "Car Makers";
pub const MODELS_HEADING: &str = "Car Models";

const LOGIN_HINT: &str = "[Enter] Login  [Ctrl+R] Signup  [Tab] Switch field  [Ctrl+C] Quit";
const CATALOG_HINT: &str =
    "[m] Create Car Maker  [n] Create Car Model  [Enter] Edit  [j/k] Select  [q] Quit";
const DIALOG_HINT: &str = "[Tab] Switch field  [Left/Right] Maker  [Esc] Close";

/// How a row should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Heading,
    Plain,
    Selected,
    Focused,
    Hint,
    Dim,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub text: String,
    pub style: LineStyle,
}

impl StyledLine {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn blank() -> Self {
        Self::new("", LineStyle::Plain)
    }
}

/// Rows for the main area, top to bottom, truncated to `width` columns
pub fn compose_lines(snapshot: &ViewModelSnapshot, width: usize) -> Vec<StyledLine> {
    let mut lines = vec![StyledLine::new(APP_TITLE, LineStyle::Title), StyledLine::blank()];

    match snapshot.screen {
        Screen::Login => push_login_form(&mut lines, snapshot),
        Screen::Catalog | Screen::ModelDialog => {
            push_catalog(&mut lines, snapshot);
            if let Some(dialog) = &snapshot.dialog {
                lines.push(StyledLine::blank());
                push_dialog(&mut lines, dialog);
            }
        }
    }

    for line in &mut lines {
        line.text = truncate_to_width(&line.text, width);
    }
    lines
}

/// Bottom row: active notification on the left, in-flight count on the right
pub fn status_line(snapshot: &ViewModelSnapshot, width: usize) -> (String, Option<NotificationLevel>) {
    let right = match snapshot.requests_in_flight {
        0 => String::new(),
        n => format!("{n} in flight"),
    };
    let (left, level) = match &snapshot.notification {
        Some(notification) => (notification.text(), Some(notification.level)),
        None => (String::new(), None),
    };

    let right_width = display_width(&right);
    let left = truncate_to_width(&left, width.saturating_sub(right_width + 1));
    let padding = width.saturating_sub(display_width(&left) + right_width);
    (format!("{left}{}{right}", " ".repeat(padding)), level)
}

fn push_login_form(lines: &mut Vec<StyledLine>, snapshot: &ViewModelSnapshot) {
    let field_style = |field: LoginField| {
        if snapshot.login_field == field {
            LineStyle::Focused
        } else {
            LineStyle::Plain
        }
    };

    lines.push(StyledLine::new(
        format!("Email:    {}", snapshot.email),
        field_style(LoginField::Email),
    ));
    lines.push(StyledLine::new(
        format!("Password: {}", "*".repeat(snapshot.password_len)),
        field_style(LoginField::Password),
    ));
    lines.push(StyledLine::blank());
    lines.push(StyledLine::new(LOGIN_HINT, LineStyle::Hint));
}

fn push_catalog(lines: &mut Vec<StyledLine>, snapshot: &ViewModelSnapshot) {
    lines.push(StyledLine::new(MAKERS_HEADING, LineStyle::Heading));
    if snapshot.makers.is_empty() {
        lines.push(StyledLine::new("  (none)", LineStyle::Dim));
    }
    for maker in &snapshot.makers {
        lines.push(StyledLine::new(
            format!("  {:>6}  {}", maker.id.to_string(), maker.name),
            LineStyle::Plain,
        ));
    }

    lines.push(StyledLine::blank());
    lines.push(StyledLine::new(MODELS_HEADING, LineStyle::Heading));
    if snapshot.models.is_empty() {
        lines.push(StyledLine::new("  (none)", LineStyle::Dim));
    }
    for (index, model) in snapshot.models.iter().enumerate() {
        let selected = index == snapshot.selected_model;
        let marker = if selected { '>' } else { ' ' };
        let maker = maker_name(&snapshot.makers, &model.maker_id);
        lines.push(StyledLine::new(
            format!("{marker} {:>6}  {:<20}  {}", model.id.to_string(), model.name, maker),
            if selected {
                LineStyle::Selected
            } else {
                LineStyle::Plain
            },
        ));
    }

    lines.push(StyledLine::blank());
    lines.push(StyledLine::new(CATALOG_HINT, LineStyle::Hint));
}

fn push_dialog(lines: &mut Vec<StyledLine>, dialog: &DialogSnapshot) {
    let field_style = |field: DialogField| {
        if dialog.focused_field == field {
            LineStyle::Focused
        } else {
            LineStyle::Plain
        }
    };

    lines.push(StyledLine::new(format!("── {} ──", dialog.title), LineStyle::Heading));
    lines.push(StyledLine::new(
        format!("Maker: < {} >", dialog.maker_label),
        field_style(DialogField::Maker),
    ));
    lines.push(StyledLine::new(
        format!("Name:  {}", dialog.name),
        field_style(DialogField::Name),
    ));
    lines.push(StyledLine::new(
        format!("[Enter] {}  {DIALOG_HINT}", dialog.submit_label),
        LineStyle::Hint,
    ));
}

fn maker_name(makers: &[CarMaker], maker_id: &RecordId) -> String {
    makers
        .iter()
        .find(|maker| maker.id.refers_to(maker_id))
        .map(|maker| maker.name.clone())
        .unwrap_or_else(|| maker_id.to_string())
}

fn display_width(text: &str) -> usize {
    text.chars().map(|ch| ch.width().unwrap_or(0)).sum()
}

/// Cut `text` so it occupies at most `width` terminal columns
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut result = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        used += ch_width;
        result.push(ch);
    }
    result
}

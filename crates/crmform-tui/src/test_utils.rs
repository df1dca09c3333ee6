//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's `TestBackend` so widget and full-frame tests can assert on
//! rendered text without a real terminal.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

use crmform_app::config::Settings;
use crmform_app::{AppState, CreateFormProps, ExtraElement};
use crmform_core::{FieldDescriptor, FieldKind, FormSchema, SelectOption};

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 100;
pub const TEST_HEIGHT: u16 = 40;

/// Small terminal for checking that nothing panics when space runs out
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    /// Row number of the first line containing `text`
    pub fn find_line(&self, text: &str) -> Option<u16> {
        (0..self.buffer().area.height).find(|&y| line_content(self.buffer(), y).contains(text))
    }

    /// Column of the first occurrence of `text` on `line`
    pub fn find_column(&self, line: u16, text: &str) -> Option<u16> {
        let content = line_content(self.buffer(), line);
        let byte = content.find(text)?;
        Some(content[..byte].chars().count() as u16)
    }

    pub fn content(&self) -> String {
        let buffer = self.buffer();
        let mut result = String::new();
        for y in 0..buffer.area.height {
            result.push_str(&line_content(buffer, y));
            result.push('\n');
        }
        result
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// Ten-field client form; `split` picks the two-column layout
pub fn client_props(split: bool) -> CreateFormProps {
    let fields = vec![
        FieldDescriptor::new("company", "Company", FieldKind::text()).required(),
        FieldDescriptor::new("contact", "Contact person", FieldKind::text()),
        FieldDescriptor::new("email", "Email", FieldKind::Email { placeholder: None }),
        FieldDescriptor::new("phone", "Phone", FieldKind::Phone { placeholder: None }),
        FieldDescriptor::new(
            "stage",
            "Stage",
            FieldKind::Select {
                options: vec![
                    SelectOption::new("lead", "Lead"),
                    SelectOption::new("won", "Won"),
                ],
            },
        ),
        FieldDescriptor::new("budget", "Budget", FieldKind::number()),
        FieldDescriptor::new("vip", "VIP", FieldKind::Checkbox),
        FieldDescriptor::new("city", "City", FieldKind::text()),
        FieldDescriptor::new("source", "Lead source", FieldKind::text()),
        FieldDescriptor::new("notes", "Notes", FieldKind::Textarea { placeholder: None }),
    ];

    let schema = FormSchema::new(fields).expect("valid test schema");
    CreateFormProps::new(schema, "New client")
        .with_split(split)
        .with_extra(ExtraElement {
            title: Some("Tips".to_string()),
            lines: vec!["Company is required".to_string()],
        })
}

pub fn test_state(split: bool) -> AppState {
    AppState::new(client_props(split), Settings::default())
}

/// A state with the modal open and one field filled
pub fn open_state_with(name: &str, value: &str) -> AppState {
    let mut state = test_state(false);
    state.open_form();
    state
        .form
        .handle_change(name, value.into())
        .expect("known field");
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_sizes() {
        assert_eq!(TestTerminal::new().area().width, TEST_WIDTH);
        assert_eq!(TestTerminal::compact().area().height, COMPACT_HEIGHT);
    }

    #[test]
    fn test_find_line_and_column() {
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(Paragraph::new("one\n  two"), term.area());

        assert_eq!(term.find_line("two"), Some(1));
        assert_eq!(term.find_column(1, "two"), Some(2));
        assert_eq!(term.find_line("three"), None);
    }
}

//! Field renderer
//!
//! Draws one field as a label row and an input row. How the input row looks
//! depends on the field kind; editing itself happens in
//! `crmform_app::field_input`.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthChar;

use crmform_app::field_input::display_text;
use crmform_core::{FieldDescriptor, FieldKind, FieldValue};

use crate::theme::styles;

/// Rows taken by one field (label + input)
pub const FIELD_HEIGHT: u16 = 2;

const CURSOR: char = '|';

pub struct FormField<'a> {
    field: &'a FieldDescriptor,
    value: Option<&'a FieldValue>,
    focused: bool,
}

impl<'a> FormField<'a> {
    pub fn new(field: &'a FieldDescriptor, value: Option<&'a FieldValue>) -> Self {
        Self {
            field,
            value,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn label_line(&self) -> Line<'a> {
        let style = if self.focused {
            styles::accent_bold()
        } else {
            styles::text_primary()
        };
        let mut spans = vec![Span::styled(self.field.label.as_str(), style)];
        if self.field.required {
            spans.push(Span::styled(" *", styles::status_red()));
        }
        Line::from(spans)
    }

    /// Text and style of the input row, before fitting it to a width
    fn input_content(&self) -> (String, Style) {
        let input = styles::input(self.focused);
        match &self.field.kind {
            FieldKind::Checkbox => {
                let checked = self.value.and_then(FieldValue::as_bool).unwrap_or(false);
                let mark = if checked { "[x]" } else { "[ ]" };
                (format!("{} {}", mark, if checked { "Yes" } else { "No" }), input)
            }
            FieldKind::Select { options } => {
                let selected = self.value.and_then(FieldValue::as_str).and_then(|value| {
                    options.iter().find(|option| option.value == value)
                });
                match selected {
                    Some(option) => (format!("< {} >", option.label), input),
                    None => ("< choose >".to_string(), input.patch(styles::text_muted())),
                }
            }
            kind => {
                let text = display_text(self.value);
                if self.focused {
                    (format!("{}{}", text, CURSOR), input)
                } else if text.is_empty() {
                    let placeholder = kind.placeholder().unwrap_or_default().to_string();
                    (placeholder, input.patch(styles::text_muted()))
                } else {
                    (text, input)
                }
            }
        }
    }
}

/// Keep the tail of `text` that fits in `width` columns, so the cursor end
/// stays visible while typing past the edge.
pub fn fit_tail(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut tail: Vec<char> = Vec::new();
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        tail.push(c);
    }
    tail.into_iter().rev().collect()
}

impl Widget for FormField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let label_area = Rect { height: 1, ..area };
        Paragraph::new(self.label_line()).render(label_area, buf);

        if area.height < FIELD_HEIGHT {
            return;
        }
        let input_area = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        let (text, style) = self.input_content();
        let width = usize::from(input_area.width);
        let padded = format!("{:<width$}", fit_tail(&text, width), width = width);
        Paragraph::new(padded).style(style).render(input_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crmform_core::SelectOption;

    fn render(field: &FieldDescriptor, value: Option<&FieldValue>, focused: bool) -> TestTerminal {
        let mut term = TestTerminal::with_size(30, 2);
        term.render_widget(FormField::new(field, value).focused(focused), term.area());
        term
    }

    #[test]
    fn test_required_field_shows_marker() {
        let field = FieldDescriptor::new("company", "Company", FieldKind::text()).required();
        let term = render(&field, None, false);
        assert!(term.buffer_contains("Company *"));
    }

    #[test]
    fn test_focused_text_shows_cursor() {
        let field = FieldDescriptor::new("company", "Company", FieldKind::text());
        let value = FieldValue::text("Acme");
        let term = render(&field, Some(&value), true);
        assert!(term.buffer_contains("Acme|"));
    }

    #[test]
    fn test_placeholder_when_empty_and_unfocused() {
        let field = FieldDescriptor::new(
            "email",
            "Email",
            FieldKind::Email {
                placeholder: Some("name@example.com".to_string()),
            },
        );
        let term = render(&field, None, false);
        assert!(term.buffer_contains("name@example.com"));
    }

    #[test]
    fn test_number_renders_without_trailing_zero() {
        let field = FieldDescriptor::new("budget", "Budget", FieldKind::number());
        let term = render(&field, Some(&FieldValue::Number(1500.0)), false);
        assert!(term.buffer_contains("1500"));
        assert!(!term.buffer_contains("1500.0"));
    }

    #[test]
    fn test_checkbox_states() {
        let field = FieldDescriptor::new("vip", "VIP", FieldKind::Checkbox);
        assert!(render(&field, Some(&FieldValue::Bool(true)), false).buffer_contains("[x] Yes"));
        assert!(render(&field, None, false).buffer_contains("[ ] No"));
    }

    #[test]
    fn test_select_shows_option_label() {
        let field = FieldDescriptor::new(
            "stage",
            "Stage",
            FieldKind::Select {
                options: vec![SelectOption::new("won", "Closed won")],
            },
        );
        let value = FieldValue::text("won");
        assert!(render(&field, Some(&value), false).buffer_contains("< Closed won >"));
        assert!(render(&field, None, false).buffer_contains("< choose >"));
    }

    #[test]
    fn test_fit_tail_keeps_end() {
        assert_eq!(fit_tail("abcdef", 3), "def");
        assert_eq!(fit_tail("ab", 5), "ab");
        assert_eq!(fit_tail("日本語", 4), "本語");
    }

    #[test]
    fn test_one_row_area_renders_label_only() {
        let field = FieldDescriptor::new("company", "Company", FieldKind::text());
        let mut term = TestTerminal::with_size(20, 1);
        term.render_widget(FormField::new(&field, None).focused(true), term.area());
        assert!(term.buffer_contains("Company"));
        assert!(!term.buffer_contains("|"));
    }
}

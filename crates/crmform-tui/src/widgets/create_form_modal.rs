//! Create/edit modal widget
//!
//! Renders a [`CreateFormState`] as a centered popup over a dimmed page:
//! header title, one or two field columns (each followed by the extra panel
//! when there is one), a status line and the submit button.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Widget};

use crmform_app::create_form::FieldColumn;
use crmform_app::{CreateFormState, ExtraElement, FormFocus};

use super::form_field::{FormField, FIELD_HEIGHT};
use super::modal_overlay;
use crate::theme::styles;

pub const SUBMIT_LABEL: &str = "Save";

/// Narrowest the modal gets when the terminal allows
const MIN_WIDTH: u16 = 36;
/// Blank row between fields
const FIELD_GAP: u16 = 1;
/// Columns between the two halves of a split layout
const COLUMN_GAP: u16 = 2;

/// Row count clamped to what a terminal can address
fn saturating_rows(count: usize) -> u16 {
    u16::try_from(count).unwrap_or(u16::MAX)
}

pub struct CreateFormModal<'a> {
    form: &'a CreateFormState,
    show_key_hints: bool,
}

impl<'a> CreateFormModal<'a> {
    pub fn new(form: &'a CreateFormState) -> Self {
        Self {
            form,
            show_key_hints: true,
        }
    }

    pub fn show_key_hints(mut self, show: bool) -> Self {
        self.show_key_hints = show;
        self
    }

    fn extra_height(&self) -> u16 {
        self.form.extra().map_or(0, |extra| {
            let title = u16::from(extra.title.is_some());
            title.saturating_add(saturating_rows(extra.lines.len()))
        })
    }

    fn column_height(&self, column: &FieldColumn<'_>) -> u16 {
        let fields = saturating_rows(column.fields.len()).saturating_mul(FIELD_HEIGHT + FIELD_GAP);
        let extra = if column.show_extra {
            self.extra_height()
        } else {
            0
        };
        fields.saturating_add(extra)
    }

    fn footer_height(&self) -> u16 {
        // status + button, plus the hint row
        2 + u16::from(self.show_key_hints)
    }

    /// Rows the modal wants, borders included
    pub fn desired_height(&self) -> u16 {
        let body = self
            .form
            .columns()
            .iter()
            .map(|column| self.column_height(column))
            .max()
            .unwrap_or(0);
        // top/bottom border and one padding row above the body
        body.saturating_add(self.footer_height()).saturating_add(3)
    }

    fn render_column(&self, column: &FieldColumn<'_>, area: Rect, buf: &mut Buffer) {
        let mut y = area.y;
        for (i, field) in column.fields.iter().enumerate() {
            if y >= area.bottom() {
                return;
            }
            let height = FIELD_HEIGHT.min(area.bottom() - y);
            let focused = self.form.focus() == FormFocus::Field(column.offset + i);
            FormField::new(field, self.form.form().value(&field.name))
                .focused(focused)
                .render(Rect::new(area.x, y, area.width, height), buf);
            y = y.saturating_add(FIELD_HEIGHT + FIELD_GAP);
        }

        if let (true, Some(extra)) = (column.show_extra, self.form.extra()) {
            if y < area.bottom() {
                let rest = Rect::new(area.x, y, area.width, area.bottom() - y);
                ExtraPanel { extra }.render(rest, buf);
            }
        }
    }

    fn status_line(&self) -> Line<'_> {
        if self.form.is_submitting() {
            return Line::styled("Saving...", styles::keybinding());
        }
        if let Some(error) = self.form.last_error() {
            return Line::styled(error, styles::status_red());
        }
        let missing = self.form.form().missing_required();
        if missing.is_empty() {
            return Line::styled("Ready to save", styles::status_green());
        }
        let labels: Vec<&str> = missing
            .iter()
            .filter_map(|name| self.form.form().schema().field(name))
            .map(|field| field.label.as_str())
            .collect();
        Line::styled(
            format!("Required: {}", labels.join(", ")),
            styles::text_muted(),
        )
    }

    fn render_button(&self, area: Rect, buf: &mut Buffer) {
        let label = format!("  {}  ", SUBMIT_LABEL);
        let width = (label.len() as u16).min(area.width);
        let button = modal_overlay::centered_rect(width, 1, area);
        let focused = self.form.focus() == FormFocus::SubmitButton;
        Paragraph::new(label)
            .style(styles::button(focused, self.form.is_submit_enabled()))
            .render(button, buf);
    }

    fn hint_line() -> Line<'static> {
        let hint = |key: &'static str, action: &'static str| {
            [
                Span::styled(key, styles::keybinding()),
                Span::styled(action, styles::text_muted()),
            ]
        };
        Line::from(
            [
                hint("Tab", " next  "),
                hint("Shift+Tab", " prev  "),
                hint("Ctrl+S", " save  "),
                hint("Esc", " close"),
            ]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>(),
        )
    }
}

impl Widget for CreateFormModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let modal = modal_overlay::centered_percent_width(
            self.form.modal_size().width_percent(),
            MIN_WIDTH,
            self.desired_height(),
            area,
        );
        modal_overlay::render_shadow(buf, modal);
        Clear.render(modal, buf);

        let title = format!(" {} ", self.form.header_text());
        let block = styles::modal_block(&title);
        let inner = block.inner(modal).inner(ratatui::layout::Margin::new(1, 0));
        block.render(modal, buf);

        let [_, body, status, button, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(u16::from(self.show_key_hints)),
        ])
        .areas(inner);

        let columns = self.form.columns();
        if let [single] = columns.as_slice() {
            self.render_column(single, body, buf);
        } else {
            let [left, _, right] = Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Length(COLUMN_GAP),
                Constraint::Fill(1),
            ])
            .areas(body);
            for (column, area) in columns.iter().zip([left, right]) {
                self.render_column(column, area, buf);
            }
        }

        Paragraph::new(self.status_line())
            .alignment(Alignment::Center)
            .render(status, buf);
        self.render_button(button, buf);
        if self.show_key_hints {
            Paragraph::new(Self::hint_line())
                .alignment(Alignment::Center)
                .render(hints, buf);
        }
    }
}

/// Caller-supplied text panel
struct ExtraPanel<'a> {
    extra: &'a ExtraElement,
}

impl Widget for ExtraPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::with_capacity(self.extra.lines.len() + 1);
        if let Some(title) = &self.extra.title {
            lines.push(Line::styled(title.as_str(), styles::accent_bold()));
        }
        lines.extend(
            self.extra
                .lines
                .iter()
                .map(|line| Line::styled(line.as_str(), styles::text_secondary())),
        );
        Paragraph::new(lines).render(area, buf);
    }
}

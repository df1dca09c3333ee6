//! Confirmation dialog widget for the discard-changes warning

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

pub use crmform_app::confirm_dialog::ConfirmDialogState;

use super::modal_overlay;
use crate::theme::{palette, styles};

const WIDTH: u16 = 50;
const HEIGHT: u16 = 8;

/// Key shown for each option, in option order
const OPTION_KEYS: [&str; 2] = ["y", "n"];

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    fn buttons(&self) -> Line<'a> {
        let mut spans = Vec::new();
        for (i, ((label, _), key)) in self.state.options.iter().zip(OPTION_KEYS).enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            let key_color = if i == 0 {
                palette::STATUS_RED
            } else {
                palette::STATUS_GREEN
            };
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(
                key,
                Style::default().fg(key_color).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled("] ", styles::text_muted()));
            spans.push(Span::styled(label.as_str(), styles::text_primary()));
        }
        Line::from(spans)
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::centered_rect(WIDTH, HEIGHT, area);
        Clear.render(modal, buf);
        modal_overlay::render_shadow(buf, modal);

        let block = Block::default()
            .title(format!(" {} ", self.state.title))
            .title_alignment(Alignment::Center)
            .title_style(Style::default().fg(palette::STATUS_YELLOW).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .border_style(Style::default().fg(palette::STATUS_YELLOW))
            .style(Style::default().bg(palette::WARNING_BG));
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [_, message, warning, _, buttons] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette::STATUS_YELLOW))
            .render(message, buf);
        Paragraph::new("Unsaved input will be lost.")
            .alignment(Alignment::Center)
            .style(styles::text_primary())
            .render(warning, buf);
        Paragraph::new(self.buttons())
            .alignment(Alignment::Center)
            .render(buttons, buf);
    }
}

//! Main render/view function (View in TEA pattern)


use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::{symbols, Frame};

use crmform_app::AppState;

use crate::theme::{palette, styles};
use crate::widgets::{ConfirmDialog, CreateFormModal};

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg, area);

    render_page(frame, area, state);

    if state.modal_open {
        frame.render_widget(
            CreateFormModal::new(&state.form).show_key_hints(state.settings.ui.show_key_hints),
            area,
        );
    }

    if let Some(dialog) = state.confirm_dialog() {
        frame.render_widget(ConfirmDialog::new(&dialog), area);
    }
}

/// Host page behind the modal
fn render_page(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(Span::styled(" crmform ", styles::accent_bold()))
        .borders(Borders::ALL)
        .border_set(symbols::border::ROUNDED)
        .border_style(Style::default().fg(palette::BORDER_DIM));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [summary, status, _, hints] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let summary_lines = vec![
        Line::styled(state.form.header_text(), styles::text_primary()),
        Line::styled(
            format!("Submissions this session: {}", state.submissions),
            styles::text_secondary(),
        ),
    ];
    frame.render_widget(Paragraph::new(summary_lines), summary);

    if let Some(message) = &state.status {
        frame.render_widget(
            Paragraph::new(Line::styled(message.as_str(), styles::status_green())),
            status,
        );
    }

    let hint_line = Line::from(vec![
        Span::styled("n", styles::keybinding()),
        Span::styled(" open form  ", styles::text_muted()),
        Span::styled("q", styles::keybinding()),
        Span::styled(" quit", styles::text_muted()),
    ]);
    frame.render_widget(Paragraph::new(hint_line), hints);
}

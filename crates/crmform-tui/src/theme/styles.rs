//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::widgets::{Block, Borders};

use super::palette;

pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Text input background, brighter while focused
pub fn input(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(palette::TEXT_PRIMARY)
            .bg(palette::INPUT_ACTIVE_BG)
    } else {
        Style::default()
            .fg(palette::TEXT_SECONDARY)
            .bg(palette::INPUT_INACTIVE_BG)
    }
}

/// Button style for the three button states
pub fn button(focused: bool, enabled: bool) -> Style {
    match (enabled, focused) {
        (false, _) => Style::default()
            .fg(palette::TEXT_MUTED)
            .bg(palette::BUTTON_DISABLED_BG),
        (true, true) => Style::default()
            .fg(palette::CONTRAST_FG)
            .bg(palette::ACCENT)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default()
            .fg(palette::TEXT_PRIMARY)
            .bg(palette::BUTTON_INACTIVE_BG),
    }
}

/// Rounded popup block with a centered accent title
pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(accent_bold())
        .title_alignment(ratatui::layout::Alignment::Center)
        .borders(Borders::ALL)
        .border_set(symbols::border::ROUNDED)
        .border_style(Style::default().fg(palette::BORDER_ACTIVE))
        .style(Style::default().bg(palette::POPUP_BG))
}

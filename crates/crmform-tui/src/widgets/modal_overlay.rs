//! Shared modal overlay helpers: placement, dimming and the drop shadow.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::theme::palette;

/// Center a fixed-size rect within `area`, clamped to the area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}

/// Center a rect that is `width_percent` of the area wide and `height` rows
/// tall, never narrower than `min_width` when the area allows it.
pub fn centered_percent_width(width_percent: u16, min_width: u16, height: u16, area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(width_percent.min(100)) / 100) as u16;
    centered_rect(width.max(min_width), height, area)
}

/// Dim every cell of `area`, as if a dark translucent layer covered it
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim);
            }
        }
    }
}

/// One-cell shadow along the right and bottom edges of `rect`
pub fn render_shadow(buf: &mut Buffer, rect: Rect) {
    let shadow = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    let right = rect.right();
    let bottom = rect.bottom();

    let edge = (rect.y.saturating_add(1)..=bottom)
        .map(|y| (right, y))
        .chain((rect.x.saturating_add(1)..=right).map(|x| (x, bottom)));
    for position in edge {
        if let Some(cell) = buf.cell_mut(position) {
            cell.set_char(' ');
            cell.set_style(shadow);
        }
    }
}

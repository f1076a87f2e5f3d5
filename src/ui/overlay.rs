//! Layers drawn on top of the board: the confetti burst and toasts.

use crate::app::state::AppState;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

pub fn render_confetti(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(confetti) = &state.confetti else {
        return;
    };
    let buf = frame.buffer_mut();
    for spark in confetti.frame(Instant::now()) {
        let col = area.x + (spark.x * area.width as f32) as u16;
        let row = area.y + (spark.y * area.height as f32) as u16;
        let glyph = if spark.round { "●" } else { "■" };
        let color = Theme::CONFETTI[spark.color % Theme::CONFETTI.len()];
        if let Some(cell) = buf.cell_mut((col, row)) {
            cell.set_symbol(glyph).set_fg(color);
        }
    }
}

pub fn render_toast(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(toast) = &state.toast else {
        return;
    };
    let width = toast.text.width() as u16 + 6;
    let popup = centered(area, width, 3);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::toast(toast.kind));
    let paragraph = Paragraph::new(toast.text.as_str())
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

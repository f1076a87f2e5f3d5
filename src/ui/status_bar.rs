use crate::app::state::AppState;
use crate::rsvp::Phase;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let status = format!(" {} ", state.status_line());
    let keys = match state.phase() {
        Phase::AcceptingForm | Phase::DecliningForm => " Enter submit · Esc back · Ctrl-C quit ",
        Phase::Idle | Phase::Success => " Y/N answer · Q quit ",
    };

    // Pad to fill remaining space
    let used = status.width() + keys.width();
    let remaining = (area.width as usize).saturating_sub(used);
    let line = Line::from(vec![
        Span::styled(status, Theme::status_bar()),
        Span::styled(" ".repeat(remaining), Theme::status_bar()),
        Span::styled(keys, Style::default().fg(Theme::HIGHLIGHT).bg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

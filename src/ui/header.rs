use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let event = &state.config.event;
    let lines = vec![
        Line::from(Span::styled(event.title.as_str(), Theme::event_title())),
        Line::from(Span::styled(
            format!("{} · {}", event.subtitle, event.date),
            Theme::muted(),
        )),
        Line::from(Span::styled(event.tagline.as_str(), Theme::title())),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

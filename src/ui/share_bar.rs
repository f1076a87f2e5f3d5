use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Spread the word ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut actions = vec![("C", "Copy link"), ("W", "WhatsApp"), ("T", "Twitter")];
    if state.native_share_available() {
        actions.push(("S", "Share"));
    }
    let mut spans = Vec::new();
    for (key, label) in actions {
        spans.push(Span::styled(format!(" [{}] ", key), Theme::key_hint()));
        spans.push(Span::raw(format!("{}  ", label)));
    }

    let mut lines = vec![Line::from(spans)];
    // Shown when copying or opening a share link failed.
    if state.show_link_fallback {
        lines.push(Line::from(vec![
            Span::styled(" Copy this link: ", Theme::muted()),
            Span::styled(state.view.share_url(), Theme::link()),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

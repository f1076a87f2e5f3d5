use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_tally(
        frame,
        halves[0],
        " Going ",
        state.yes_display.displayed(),
        Theme::count_yes(),
    );
    render_tally(
        frame,
        halves[1],
        " Not going ",
        state.no_display.displayed(),
        Theme::count_no(),
    );
}

fn render_tally(frame: &mut Frame, area: Rect, title: &str, value: usize, style: Style) {
    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);
    let number = Paragraph::new(Span::styled(value.to_string(), style)).alignment(Alignment::Center);
    frame.render_widget(number, rows[1]);
}

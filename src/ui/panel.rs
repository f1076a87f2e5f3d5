use crate::app::state::{AppState, FormField, InputState};
use crate::rsvp::Phase;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = match state.phase() {
        Phase::Idle => " RSVP ",
        Phase::AcceptingForm => " Register ",
        Phase::DecliningForm => " Can't make it ",
        Phase::Success => " You're in ",
    };
    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match state.phase() {
        Phase::Idle => render_idle(frame, inner),
        Phase::AcceptingForm => render_accept_form(frame, inner, state),
        Phase::DecliningForm => render_decline_form(frame, inner, state),
        Phase::Success => render_success(frame, inner, state),
    }
}

fn buttons_line() -> Line<'static> {
    Line::from(vec![
        Span::styled(" [Y] I'm in! 🏃 ", Theme::button_yes()),
        Span::raw("   "),
        Span::styled(" [N] Can't make it ", Theme::button_no()),
    ])
}

fn render_idle(frame: &mut Frame, area: Rect) {
    let lines = vec![Line::default(), buttons_line()];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_success(frame: &mut Frame, area: Rect, state: &AppState) {
    let lines = vec![
        Line::from(Span::styled(
            "🎉 You're registered! See you at the start line.",
            Theme::count_yes(),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Share: ", Theme::muted()),
            Span::styled(state.view.share_url(), Theme::link()),
        ]),
        Line::default(),
        buttons_line(),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_accept_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let focus = state.form.focus;
    render_field(frame, rows[0], " Name ", &state.form.name, focus == FormField::Name, "Your full name");
    render_field(frame, rows[1], " Email ", &state.form.email, focus == FormField::Email, "you@example.com");
    render_hint(frame, rows[2], "Enter register · Tab next field · Esc back");
}

fn render_decline_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    render_field(
        frame,
        rows[0],
        " Message (optional) ",
        &state.form.message,
        true,
        "Anything you'd like to tell us?",
    );
    render_hint(frame, rows[1], "Enter send · Esc back");
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &InputState,
    focused: bool,
    placeholder: &str,
) {
    let block = Block::default()
        .title(label)
        .title_style(if focused { Theme::title() } else { Theme::muted() })
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = if input.text.is_empty() {
        Span::styled(placeholder, Theme::muted())
    } else {
        Span::styled(input.text.as_str(), Theme::input_text())
    };
    frame.render_widget(Paragraph::new(text), inner);

    if focused && inner.width > 0 {
        let cursor_x = inner.x.saturating_add(input.cursor_column() as u16);
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}

fn render_hint(frame: &mut Frame, area: Rect, hint: &str) {
    frame.render_widget(Paragraph::new(Span::styled(hint, Theme::muted())), area);
}

mod counts;
mod header;
mod layout;
mod overlay;
mod panel;
mod share_bar;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    header::render(frame, app_layout.header, state);
    counts::render(frame, app_layout.counts, state);
    panel::render(frame, app_layout.panel, state);
    share_bar::render(frame, app_layout.share_bar, state);
    status_bar::render(frame, app_layout.status_bar, state);

    overlay::render_confetti(frame, area, state);
    overlay::render_toast(frame, area, state);
}

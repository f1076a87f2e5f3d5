use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub counts: Rect,
    pub panel: Rect,
    pub share_bar: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Event header
            Constraint::Length(5), // Live counts
            Constraint::Min(7),    // Buttons, form or success
            Constraint::Length(4), // Share actions
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        counts: chunks[1],
        panel: chunks[2],
        share_bar: chunks[3],
        status_bar: chunks[4],
    }
}

/// `width` x `height` rectangle centered in `area`, clipped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_fill_the_screen() {
        let area = Rect::new(0, 0, 80, 30);
        let layout = compute_layout(area);
        assert_eq!(layout.header.height, 4);
        assert_eq!(layout.status_bar.y, 29);
        assert_eq!(layout.panel.height, 30 - 4 - 5 - 4 - 1);
    }

    #[test]
    fn test_centered_clips() {
        let area = Rect::new(10, 5, 20, 6);
        assert_eq!(centered(area, 10, 2), Rect::new(15, 7, 10, 2));
        assert_eq!(centered(area, 50, 50), area);
    }
}

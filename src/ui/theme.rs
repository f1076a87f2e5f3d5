use crate::app::confetti::PALETTE_SIZE;
use crate::app::state::ToastKind;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Rgb(0xff, 0x3d, 0x00);
    pub const HIGHLIGHT: Color = Color::Rgb(0xff, 0xea, 0x00);
    pub const SUCCESS: Color = Color::Rgb(0x00, 0xe6, 0x76);
    pub const SURFACE: Color = Color::Rgb(0x14, 0x14, 0x1f);

    pub const CONFETTI: [Color; PALETTE_SIZE] = [
        Self::ACCENT,
        Self::HIGHLIGHT,
        Self::SUCCESS,
        Color::White,
    ];

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn event_title() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn count_yes() -> Style {
        Style::default().fg(Self::SUCCESS).add_modifier(Modifier::BOLD)
    }

    pub fn count_no() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn button_yes() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_no() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Self::HIGHLIGHT).add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn link() -> Style {
        Style::default()
            .fg(Self::HIGHLIGHT)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn toast(kind: ToastKind) -> Style {
        let fg = match kind {
            ToastKind::Acknowledge => Color::White,
            ToastKind::Copied => Self::SUCCESS,
            ToastKind::Notice => Self::HIGHLIGHT,
            ToastKind::Error => Color::Red,
        };
        Style::default().fg(fg).bg(Self::SURFACE)
    }
}

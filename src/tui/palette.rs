use ratatui::style::Color;

use crate::models::Theme;

/// Colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight_text: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::Rgb(250, 250, 250),
                text: Color::Rgb(24, 24, 27),
                muted: Color::Rgb(113, 113, 122),
                accent: Color::Rgb(99, 102, 241),
                highlight_text: Color::Rgb(250, 250, 250),
                success: Color::Rgb(22, 163, 74),
                error: Color::Rgb(220, 38, 38),
            },
            Theme::Dark => Self {
                background: Color::Rgb(24, 24, 27),
                text: Color::Rgb(250, 250, 250),
                muted: Color::Rgb(113, 113, 122),
                accent: Color::Rgb(16, 185, 129),
                highlight_text: Color::Rgb(250, 250, 250),
                success: Color::Rgb(16, 185, 129),
                error: Color::Rgb(239, 68, 68),
            },
            Theme::Ocean => Self {
                background: Color::Rgb(8, 47, 73),
                text: Color::Rgb(224, 242, 254),
                muted: Color::Rgb(125, 211, 252),
                accent: Color::Rgb(14, 165, 233),
                highlight_text: Color::Rgb(8, 47, 73),
                success: Color::Rgb(45, 212, 191),
                error: Color::Rgb(251, 113, 133),
            },
            Theme::Forest => Self {
                background: Color::Rgb(20, 46, 32),
                text: Color::Rgb(236, 252, 203),
                muted: Color::Rgb(134, 169, 118),
                accent: Color::Rgb(101, 163, 13),
                highlight_text: Color::Rgb(20, 46, 32),
                success: Color::Rgb(163, 230, 53),
                error: Color::Rgb(248, 113, 113),
            },
            Theme::Sunset => Self {
                background: Color::Rgb(67, 20, 7),
                text: Color::Rgb(255, 237, 213),
                muted: Color::Rgb(253, 186, 116),
                accent: Color::Rgb(249, 115, 22),
                highlight_text: Color::Rgb(67, 20, 7),
                success: Color::Rgb(250, 204, 21),
                error: Color::Rgb(244, 63, 94),
            },
        }
    }
}

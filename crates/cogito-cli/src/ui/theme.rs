use clap::ValueEnum;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Color palette selector. One browse component, themed by parameter;
/// there are no per-theme view variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
    Sepia,
}

/// Concrete colors for one theme.
pub struct Palette {
    pub text: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub highlight: Color,
    pub error: Color,
}

impl Theme {
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                text: Color::Black,
                accent: Color::Blue,
                muted: Color::DarkGray,
                border: Color::Gray,
                highlight: Color::Blue,
                error: Color::Red,
            },
            Theme::Dark => Palette {
                text: Color::White,
                accent: Color::Cyan,
                muted: Color::DarkGray,
                border: Color::DarkGray,
                highlight: Color::Yellow,
                error: Color::LightRed,
            },
            Theme::Sepia => Palette {
                text: Color::Rgb(92, 75, 55),
                accent: Color::Rgb(153, 101, 21),
                muted: Color::Rgb(160, 140, 110),
                border: Color::Rgb(160, 140, 110),
                highlight: Color::Rgb(191, 54, 12),
                error: Color::Rgb(191, 54, 12),
            },
        }
    }
}

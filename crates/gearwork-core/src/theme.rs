//! Display settings shared by the config file and the app.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Time format for the digital readout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeFormat {
    #[default]
    TwelveHour,
    TwentyFourHour,
}

impl TimeFormat {
    /// Toggle between 12-hour and 24-hour format.
    pub fn toggle(self) -> Self {
        match self {
            TimeFormat::TwelveHour => TimeFormat::TwentyFourHour,
            TimeFormat::TwentyFourHour => TimeFormat::TwelveHour,
        }
    }
}

/// Accent color for the dial, readout and help line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Slate,
    Cyan,
    Green,
    Magenta,
    Yellow,
    White,
}

impl ColorTheme {
    /// Cycle to the next color theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Slate => ColorTheme::Cyan,
            ColorTheme::Cyan => ColorTheme::Green,
            ColorTheme::Green => ColorTheme::Magenta,
            ColorTheme::Magenta => ColorTheme::Yellow,
            ColorTheme::Yellow => ColorTheme::White,
            ColorTheme::White => ColorTheme::Slate,
        }
    }

    /// Convert theme to Ratatui Color.
    pub fn color(self) -> Color {
        match self {
            ColorTheme::Slate => Color::Rgb(148, 163, 184),
            ColorTheme::Cyan => Color::Cyan,
            ColorTheme::Green => Color::Green,
            ColorTheme::Magenta => Color::Magenta,
            ColorTheme::Yellow => Color::Yellow,
            ColorTheme::White => Color::White,
        }
    }
}

/// How fast simulated time runs relative to real time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpeedPreset {
    #[default]
    RealTime,
    Minute,
    Hour,
}

impl SpeedPreset {
    pub const ALL: [SpeedPreset; 3] = [SpeedPreset::RealTime, SpeedPreset::Minute, SpeedPreset::Hour];

    /// Simulated seconds per real second.
    pub fn multiplier(self) -> f64 {
        match self {
            SpeedPreset::RealTime => 1.0,
            SpeedPreset::Minute => 60.0,
            SpeedPreset::Hour => 3600.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpeedPreset::RealTime => "1x",
            SpeedPreset::Minute => "60x",
            SpeedPreset::Hour => "3600x",
        }
    }
}

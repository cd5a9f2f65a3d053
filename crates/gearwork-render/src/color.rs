//! Colors for gears and the dial.

use ratatui::style::Color;

/// Dark backdrop behind the see-through dial.
pub const BACKDROP: Color = Color::Rgb(15, 23, 42);

/// Gear and dial colors.
pub mod palette {
    use ratatui::style::Color;

    pub const RED: Color = Color::Rgb(239, 68, 68);
    pub const BLUE: Color = Color::Rgb(59, 130, 246);
    pub const GREEN: Color = Color::Rgb(34, 197, 94);
    pub const SLATE: Color = Color::Rgb(148, 163, 184);
    pub const LIGHT_RED: Color = Color::Rgb(252, 165, 165);
    pub const LIGHT_BLUE: Color = Color::Rgb(147, 197, 253);
    pub const LIGHT_GREEN: Color = Color::Rgb(134, 239, 172);
    pub const AXLE: Color = Color::Rgb(203, 213, 225);
}

/// Blend `color` toward `background` by `opacity` (0.0-1.0).
///
/// Terminals have no alpha channel, so translucency is faked by mixing with
/// the color underneath. Only RGB colors can be mixed; others pass through.
pub fn fade(color: Color, opacity: f64, background: Color) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match (color, background) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => Color::Rgb(
            mix(r, br, opacity),
            mix(g, bg, opacity),
            mix(b, bb, opacity),
        ),
        _ => color,
    }
}

fn mix(fg: u8, bg: u8, opacity: f64) -> u8 {
    (f64::from(fg) * opacity + f64::from(bg) * (1.0 - opacity)).round() as u8
}

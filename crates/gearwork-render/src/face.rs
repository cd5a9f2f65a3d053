//! Clock dial, hands and gear painting on a canvas.

use gearwork_core::{HandAngles, Point};
use ratatui::{
    style::{Color, Style},
    text::Span,
    widgets::canvas::{Circle, Context, Line as CanvasLine},
};

use crate::color::{fade, palette};
use crate::compose::{hand_tip, to_canvas};
use crate::scene::GearFrame;

/// Side of the square dial viewport.
pub const DIAL_SIZE: f64 = 320.0;
pub const DIAL_CENTER: Point = Point::new(DIAL_SIZE / 2.0, DIAL_SIZE / 2.0);

const RIM_RADIUS: f64 = 152.0;
const TICK_OUTER: f64 = 146.0;
const TICK_MINOR: f64 = 139.0;
const TICK_MAJOR: f64 = 130.0;
const NUMERAL_RADIUS: f64 = 116.0;

const HOUR_HAND: f64 = 80.0;
const MINUTE_HAND: f64 = 121.6;
const SECOND_HAND: f64 = 144.0;

/// Spokes drawn inside each gear so slow rotation is visible.
const SPOKES: u32 = 3;

/// Converts scene coordinates for one canvas and centers text.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    /// Scene height, for the y flip.
    pub height: f64,
    /// Scene units covered by one terminal column.
    pub units_per_column: f64,
}

impl Painter {
    pub fn line(&self, ctx: &mut Context, from: Point, to: Point, color: Color) {
        let (x1, y1) = to_canvas(from, self.height);
        let (x2, y2) = to_canvas(to, self.height);
        ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
    }

    /// Straight line broken into `dash`-long pieces.
    pub fn dashed_line(&self, ctx: &mut Context, from: Point, to: Point, dash: f64, color: Color) {
        let length = from.distance(to);
        if length == 0.0 || dash <= 0.0 {
            return;
        }
        let (dx, dy) = ((to.x - from.x) / length, (to.y - from.y) / length);
        let mut start = 0.0;
        while start < length {
            let end = (start + dash).min(length);
            let a = Point::new(from.x + dx * start, from.y + dy * start);
            let b = Point::new(from.x + dx * end, from.y + dy * end);
            self.line(ctx, a, b, color);
            start += dash * 2.0;
        }
    }

    pub fn circle(&self, ctx: &mut Context, center: Point, radius: f64, color: Color) {
        let (x, y) = to_canvas(center, self.height);
        ctx.draw(&Circle {
            x,
            y,
            radius,
            color,
        });
    }

    /// Closed polygon through `points`.
    pub fn polygon(&self, ctx: &mut Context, points: &[Point], color: Color) {
        for (i, &p) in points.iter().enumerate() {
            let next = points[(i + 1) % points.len()];
            self.line(ctx, p, next, color);
        }
    }

    /// Text horizontally centered on `at`.
    pub fn text(&self, ctx: &mut Context, at: Point, text: &str, color: Color) {
        let half_width = text.chars().count() as f64 * self.units_per_column / 2.0;
        let (x, y) = to_canvas(Point::new(at.x - half_width, at.y), self.height);
        ctx.print(x, y, Span::styled(text.to_string(), Style::new().fg(color)));
    }
}

/// Draw gears: tooth outline and spokes turn with the gear; axle and labels
/// stay put at the mount point.
pub fn paint_gears(ctx: &mut Context, painter: &Painter, gears: &[GearFrame], background: Color) {
    for gear in gears {
        let color = fade(gear.color, gear.opacity, background);
        painter.polygon(ctx, &gear.points, color);

        let spoke_end = gear.outer_radius * 0.6;
        for i in 0..SPOKES {
            let angle = gear.rotation + f64::from(i) * 360.0 / f64::from(SPOKES);
            let inner = Point::new(gear.hole_radius, 0.0).rotated(angle);
            let outer = Point::new(spoke_end, 0.0).rotated(angle);
            painter.line(
                ctx,
                inner.translated(gear.center.x, gear.center.y),
                outer.translated(gear.center.x, gear.center.y),
                color,
            );
        }

        painter.circle(
            ctx,
            gear.center,
            gear.outer_radius * 0.12,
            fade(palette::AXLE, gear.opacity.max(0.6), background),
        );

        if let Some(label) = &gear.label {
            let at = gear.center.translated(0.0, -gear.outer_radius - 20.0);
            painter.text(ctx, at, label, palette::SLATE);
        }
        if let Some(speed_label) = &gear.speed_label {
            let at = gear.center.translated(0.0, gear.outer_radius + 30.0);
            painter.text(ctx, at, speed_label, Color::DarkGray);
        }
    }
}

/// Draw the rim, minute ticks and hour numerals.
pub fn paint_dial(ctx: &mut Context, painter: &Painter, accent: Color, skeleton: bool) {
    let (major, minor) = if skeleton {
        (Color::Gray, Color::DarkGray)
    } else {
        (accent, Color::DarkGray)
    };

    painter.circle(ctx, DIAL_CENTER, RIM_RADIUS, accent);

    for i in 0..60 {
        let angle = f64::from(i) * 6.0;
        let is_major = i % 5 == 0;
        let inner = if is_major { TICK_MAJOR } else { TICK_MINOR };
        painter.line(
            ctx,
            hand_tip(DIAL_CENTER, inner, angle),
            hand_tip(DIAL_CENTER, TICK_OUTER, angle),
            if is_major { major } else { minor },
        );
    }

    for hour in 1..=12u32 {
        let at = hand_tip(DIAL_CENTER, NUMERAL_RADIUS, f64::from(hour) * 30.0);
        painter.text(ctx, at, &hour.to_string(), major);
    }
}

/// Draw the three hands and the center cap.
pub fn paint_hands(ctx: &mut Context, painter: &Painter, hands: &HandAngles) {
    let hands_spec = [
        (hands.hours, HOUR_HAND, palette::RED),
        (hands.minutes, MINUTE_HAND, palette::BLUE),
        (hands.seconds, SECOND_HAND, palette::GREEN),
    ];
    for (angle, length, color) in hands_spec {
        painter.line(ctx, DIAL_CENTER, hand_tip(DIAL_CENTER, length, angle), color);
    }
    painter.circle(ctx, DIAL_CENTER, 6.0, palette::AXLE);
}

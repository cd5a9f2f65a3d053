//! Clock renderer state.

use gearwork_core::{GearResult, Point, ProfileCache, angles};
use ratatui::{
    Frame,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::canvas::{Canvas, Context},
};
use tracing::warn;

use crate::color::{BACKDROP, palette};
use crate::compose::fit_aspect;
use crate::face::{DIAL_SIZE, Painter, paint_dial, paint_gears, paint_hands};
use crate::scene::{GearFrame, Scene};

/// Owns the scenes and the profile cache shared by every frame.
#[derive(Debug)]
pub struct ClockRenderer {
    cache: ProfileCache,
    face: Scene,
    mechanism: Scene,
}

impl ClockRenderer {
    pub fn new() -> GearResult<Self> {
        Ok(Self {
            cache: ProfileCache::new(),
            face: Scene::skeleton_face()?,
            mechanism: Scene::mechanism()?,
        })
    }

    pub fn cache(&self) -> &ProfileCache {
        &self.cache
    }

    fn gear_frames(&self, scene: &Scene, time_seconds: f64) -> Vec<GearFrame> {
        match scene.frame(time_seconds, &self.cache) {
            Ok(frames) => frames,
            Err(e) => {
                warn!(error = %e, "skipping gears for this frame");
                Vec::new()
            }
        }
    }

    /// Render the dial into `area`. In skeleton mode the dial turns
    /// see-through and the gears behind the hands show.
    pub fn render_face(
        &self,
        frame: &mut Frame,
        area: Rect,
        time_seconds: f64,
        skeleton: bool,
        accent: Color,
    ) {
        let area = fit_aspect(area, self.face.aspect());
        if area.width == 0 || area.height == 0 {
            return;
        }
        let painter = Painter {
            height: DIAL_SIZE,
            units_per_column: DIAL_SIZE / f64::from(area.width),
        };
        let hands = angles(time_seconds);
        let gears = if skeleton {
            self.gear_frames(&self.face, time_seconds)
        } else {
            Vec::new()
        };

        let mut canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, DIAL_SIZE])
            .y_bounds([0.0, DIAL_SIZE])
            .paint(|ctx| {
                paint_gears(ctx, &painter, &gears, BACKDROP);
                ctx.layer();
                paint_dial(ctx, &painter, accent, skeleton);
                ctx.layer();
                paint_hands(ctx, &painter, &hands);
            });
        if skeleton {
            canvas = canvas.background_color(BACKDROP);
        }
        frame.render_widget(canvas, area);
    }

    /// Render the transmission panel into `area`.
    pub fn render_mechanism(&self, frame: &mut Frame, area: Rect, time_seconds: f64, accent: Color) {
        let scene = &self.mechanism;
        let area = fit_aspect(area, scene.aspect());
        if area.width == 0 || area.height == 0 {
            return;
        }
        let painter = Painter {
            height: scene.height(),
            units_per_column: scene.width() / f64::from(area.width),
        };
        let gears = self.gear_frames(scene, time_seconds);

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, scene.width()])
            .y_bounds([0.0, scene.height()])
            .paint(|ctx| {
                // Shaft behind the gears
                painter.line(
                    ctx,
                    Point::new(100.0, 150.0),
                    Point::new(400.0, 150.0),
                    Color::DarkGray,
                );
                ctx.layer();
                paint_gears(ctx, &painter, &gears, Color::Rgb(241, 245, 249));
                ctx.layer();
                paint_flow_arrow(ctx, &painter, 120.0, 230.0, "slows down", accent);
                paint_flow_arrow(ctx, &painter, 270.0, 400.0, "slows again", accent);
                for (i, line) in HOW_IT_WORKS.iter().enumerate() {
                    let y = 14.0 + 16.0 * i as f64;
                    painter.text(ctx, Point::new(scene.width() / 2.0, y), line, palette::SLATE);
                }
            });
        frame.render_widget(canvas, area);
    }
}

/// Caption across the top of the transmission panel.
const HOW_IT_WORKS: [&str; 2] = [
    "How it works: a small gear driving a big one",
    "turns it slower. That is why the hour hand creeps!",
];

/// Dashed arrow under the gears pointing along the reduction.
fn paint_flow_arrow(
    ctx: &mut Context,
    painter: &Painter,
    from_x: f64,
    to_x: f64,
    text: &str,
    color: Color,
) {
    let y = 220.0;
    let tip = Point::new(to_x, y);
    painter.dashed_line(ctx, Point::new(from_x, y), tip, 5.0, palette::SLATE);
    painter.line(ctx, tip, tip.translated(-8.0, -5.0), palette::SLATE);
    painter.line(ctx, tip, tip.translated(-8.0, 5.0), palette::SLATE);
    painter.text(ctx, Point::new((from_x + to_x) / 2.0, y + 20.0), text, color);
}

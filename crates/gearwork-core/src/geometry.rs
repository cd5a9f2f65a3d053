//! Procedural gear silhouettes.

use std::f64::consts::TAU;

use ratatui::style::Color;

use crate::angle::Point;
use crate::error::{GearError, GearResult};

/// Fewest teeth that still make a simple polygon.
pub const MIN_TEETH: u32 = 3;

/// Tooth height as a fraction of the outer radius.
pub const TOOTH_HEIGHT_RATIO: f64 = 0.15;

/// Axle hole radius as a fraction of the outer radius.
pub const HOLE_RATIO: f64 = 0.15;

/// Tooth share of each angular segment; the rest is the gap.
const TOOTH_SHARE: f64 = 0.5;

/// Where the flank reaches the tip, as a fraction of the tooth width.
const TIP_START: f64 = 0.25;
const TIP_END: f64 = 0.75;

pub(crate) fn validate(teeth: u32, outer_radius: f64) -> GearResult<()> {
    if teeth < MIN_TEETH {
        return Err(GearError::InvalidGearSpec(format!(
            "a gear needs at least {MIN_TEETH} teeth, got {teeth}"
        )));
    }
    // Written to also reject NaN
    if !(outer_radius > 0.0 && outer_radius.is_finite()) {
        return Err(GearError::InvalidGearSpec(format!(
            "outer radius must be positive and finite, got {outer_radius}"
        )));
    }
    Ok(())
}

/// Closed tooth polygon for a gear, in its local unrotated frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GearProfile {
    pub teeth: u32,
    pub outer_radius: f64,
    pub inner_radius: f64,
    /// Reported for the renderer; not part of the polygon.
    pub hole_radius: f64,
    /// `4 * teeth` vertices; the last connects back to the first.
    pub points: Vec<Point>,
}

impl GearProfile {
    /// Radius halfway up the teeth, where two gears are laid out to mesh.
    pub fn pitch_radius(&self) -> f64 {
        (self.inner_radius + self.outer_radius) / 2.0
    }

    /// Edges of the closed polygon, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}

/// Generate the tooth polygon for `teeth` teeth and `outer_radius`.
///
/// Each of the `teeth` equal segments rises from the root circle to the tip,
/// runs along the tip, drops back to the root over the first half of the
/// segment and leaves the second half as a gap. Proportions are fixed, so
/// the shape scales linearly with the radius.
pub fn tooth_profile(teeth: u32, outer_radius: f64) -> GearResult<GearProfile> {
    validate(teeth, outer_radius)?;

    let tooth_height = outer_radius * TOOTH_HEIGHT_RATIO;
    let inner_radius = outer_radius - tooth_height;
    let angle_step = TAU / f64::from(teeth);
    let tooth_width = angle_step * TOOTH_SHARE;

    let mut points = Vec::with_capacity(teeth as usize * 4);
    for i in 0..teeth {
        let start = f64::from(i) * angle_step;
        points.push(Point::from_polar(inner_radius, start));
        points.push(Point::from_polar(outer_radius, start + tooth_width * TIP_START));
        points.push(Point::from_polar(outer_radius, start + tooth_width * TIP_END));
        points.push(Point::from_polar(inner_radius, start + tooth_width));
    }

    Ok(GearProfile {
        teeth,
        outer_radius,
        inner_radius,
        hole_radius: outer_radius * HOLE_RATIO,
        points,
    })
}

/// Immutable description of one gear.
#[derive(Debug, Clone, PartialEq)]
pub struct GearSpec {
    pub teeth: u32,
    pub outer_radius: f64,
    pub color: Color,
    pub label: Option<String>,
    pub speed_label: Option<String>,
}

impl GearSpec {
    pub fn new(teeth: u32, outer_radius: f64, color: Color) -> GearResult<Self> {
        validate(teeth, outer_radius)?;
        Ok(Self {
            teeth,
            outer_radius,
            color,
            label: None,
            speed_label: None,
        })
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_speed_label(mut self, speed_label: impl Into<String>) -> Self {
        self.speed_label = Some(speed_label.into());
        self
    }

    pub fn profile(&self) -> GearResult<GearProfile> {
        tooth_profile(self.teeth, self.outer_radius)
    }
}

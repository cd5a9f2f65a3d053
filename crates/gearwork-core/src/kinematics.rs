//! Kinematic model: time in seconds to hand and gear rotation.
//!
//! Angles are in degrees, signed, and never wrapped. Rotation is applied
//! modulo 360 downstream, so keeping the raw value means the animation
//! never jumps across hour or day boundaries.

use crate::error::{GearError, GearResult};

/// Second hand: one turn per 60 seconds.
pub const SECONDS_DEG_PER_SEC: f64 = 6.0;

/// Minute hand: one turn per 3600 seconds.
pub const MINUTES_DEG_PER_SEC: f64 = 0.1;

/// Hour hand: one turn per 43200 seconds.
pub const HOURS_DEG_PER_SEC: f64 = 1.0 / 120.0;

/// One of the three clock hands, each carried by its own gear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Seconds,
    Minutes,
    Hours,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Seconds, Hand::Minutes, Hand::Hours];
}

/// Rotation of each hand at a given instant, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandAngles {
    pub seconds: f64,
    pub minutes: f64,
    pub hours: f64,
}

impl HandAngles {
    pub fn get(&self, hand: Hand) -> f64 {
        match hand {
            Hand::Seconds => self.seconds,
            Hand::Minutes => self.minutes,
            Hand::Hours => self.hours,
        }
    }
}

/// Compute the hand angles for `time_seconds`.
///
/// Total over all finite inputs: negative time yields negative angles.
pub fn angles(time_seconds: f64) -> HandAngles {
    HandAngles {
        seconds: time_seconds * SECONDS_DEG_PER_SEC,
        minutes: time_seconds * MINUTES_DEG_PER_SEC,
        hours: time_seconds * HOURS_DEG_PER_SEC,
    }
}

/// Angle of a gear meshed with a driver.
///
/// Meshed gears counter-rotate and their angular velocities are inversely
/// proportional to their tooth counts. Apply once per meshing step: a chain
/// of meshes alternates direction on each link.
pub fn meshed_angle(driver_angle: f64, driver_teeth: u32, own_teeth: u32) -> GearResult<f64> {
    if driver_teeth == 0 || own_teeth == 0 {
        return Err(GearError::InvalidGearSpec(format!(
            "meshed gears need positive tooth counts (driver {driver_teeth}, own {own_teeth})"
        )));
    }
    Ok(-driver_angle * f64::from(driver_teeth) / f64::from(own_teeth))
}

/// Angle of a gear fixed to the same arbor as its driver.
pub fn arbor_angle(driver_angle: f64) -> f64 {
    driver_angle
}

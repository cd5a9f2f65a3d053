//! Core types for the gearwork clock.
//!
//! Two pure components live here: the kinematic model, which maps a
//! continuous time value to hand and gear rotations, and the gear geometry
//! generator, which turns a tooth count and radius into a closed polygon.
//! Everything else in this crate supports those two: angle helpers, a
//! memoizing profile cache, a gear-train graph, and display formatting.

mod angle;
mod cache;
mod error;
mod format;
mod geometry;
mod kinematics;
mod theme;
mod train;

pub use angle::{Point, equivalent_degrees, normalize_degrees};
pub use cache::ProfileCache;
pub use error::{GearError, GearResult};
pub use format::{SECONDS_PER_DAY, format_clock, seconds_since_midnight};
pub use geometry::{GearProfile, GearSpec, HOLE_RATIO, MIN_TEETH, TOOTH_HEIGHT_RATIO, tooth_profile};
pub use kinematics::{
    HOURS_DEG_PER_SEC, Hand, HandAngles, MINUTES_DEG_PER_SEC, SECONDS_DEG_PER_SEC, angles,
    arbor_angle, meshed_angle,
};
pub use theme::{ColorTheme, SpeedPreset, TimeFormat};
pub use train::{Drive, GearId, GearTrain, RotationState, TrainGear};

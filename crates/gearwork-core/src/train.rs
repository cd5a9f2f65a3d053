//! Gear trains: gears linked by meshing or by a shared arbor.
//!
//! A train is a DAG. Root gears are driven directly by a clock hand; every
//! other gear derives its angle from a gear added before it, so insertion
//! order is a valid evaluation order and cycles cannot be expressed.

use std::collections::HashMap;
use std::fmt;

use crate::error::{GearError, GearResult};
use crate::geometry::{GearSpec, validate};
use crate::kinematics::{Hand, angles, arbor_angle, meshed_angle};

/// Name of a gear within a train.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GearId(String);

impl GearId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GearId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GearId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// How a gear gets its rotation.
#[derive(Debug, Clone, PartialEq)]
pub enum Drive {
    /// Turns with a clock hand.
    Hand(Hand),
    /// Meshes with the named gear and counter-rotates.
    Mesh(GearId),
    /// Shares an arbor with the named gear and turns with it.
    Arbor(GearId),
}

/// A gear and its drive.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainGear {
    pub id: GearId,
    pub spec: GearSpec,
    pub drive: Drive,
}

/// A set of gears whose angles all follow from one time value.
#[derive(Debug, Clone, Default)]
pub struct GearTrain {
    gears: Vec<TrainGear>,
    index: HashMap<GearId, usize>,
}

impl GearTrain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a gear. A `Mesh` or `Arbor` drive must name a gear already in
    /// the train.
    pub fn add(
        &mut self,
        id: impl Into<GearId>,
        spec: GearSpec,
        drive: Drive,
    ) -> GearResult<&mut Self> {
        let id = id.into();
        validate(spec.teeth, spec.outer_radius)?;
        if self.index.contains_key(&id) {
            return Err(GearError::DuplicateGear(id.to_string()));
        }
        if let Drive::Mesh(driver) | Drive::Arbor(driver) = &drive
            && !self.index.contains_key(driver)
        {
            return Err(GearError::UnknownGear(driver.to_string()));
        }

        self.index.insert(id.clone(), self.gears.len());
        self.gears.push(TrainGear { id, spec, drive });
        Ok(self)
    }

    pub fn get(&self, id: &GearId) -> Option<&TrainGear> {
        self.index.get(id).map(|&i| &self.gears[i])
    }

    pub fn gears(&self) -> &[TrainGear] {
        &self.gears
    }

    pub fn len(&self) -> usize {
        self.gears.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gears.is_empty()
    }

    /// Rotation of every gear at `time_seconds`, in train order.
    pub fn rotations(&self, time_seconds: f64) -> GearResult<RotationState<'_>> {
        let hands = angles(time_seconds);
        let mut values: Vec<f64> = Vec::with_capacity(self.gears.len());

        for gear in &self.gears {
            let angle = match &gear.drive {
                Drive::Hand(hand) => hands.get(*hand),
                Drive::Mesh(driver) => {
                    let i = self.index[driver];
                    meshed_angle(values[i], self.gears[i].spec.teeth, gear.spec.teeth)?
                }
                Drive::Arbor(driver) => arbor_angle(values[self.index[driver]]),
            };
            values.push(angle);
        }

        Ok(RotationState {
            train: self,
            values,
        })
    }
}

/// Signed rotation in degrees for each gear of a train.
#[derive(Debug, Clone)]
pub struct RotationState<'a> {
    train: &'a GearTrain,
    /// Parallel to `train.gears`.
    values: Vec<f64>,
}

impl<'a> RotationState<'a> {
    pub fn get(&self, id: &GearId) -> Option<f64> {
        self.train.index.get(id).map(|&i| self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a GearId, f64)> + '_ {
        self.train
            .gears
            .iter()
            .map(|g| &g.id)
            .zip(self.values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

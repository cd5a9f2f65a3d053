//! Gear layouts: a gear train plus where each gear is mounted.

use gearwork_core::{
    Drive, GearId, GearResult, GearSpec, GearTrain, Hand, Point, ProfileCache,
};
use ratatui::style::Color;

use crate::color::palette;
use crate::compose::place_profile;

/// Where and how visibly a gear is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mount {
    pub center: Point,
    pub opacity: f64,
}

/// Everything the canvas needs to draw one gear for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GearFrame {
    pub id: GearId,
    /// Polygon already rotated and moved into scene coordinates.
    pub points: Vec<Point>,
    pub center: Point,
    pub rotation: f64,
    pub color: Color,
    pub opacity: f64,
    pub outer_radius: f64,
    pub hole_radius: f64,
    pub label: Option<String>,
    pub speed_label: Option<String>,
}

/// A gear train laid out on a fixed-size viewport.
#[derive(Debug, Clone)]
pub struct Scene {
    width: f64,
    height: f64,
    train: GearTrain,
    /// Parallel to `train.gears()`.
    mounts: Vec<Mount>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            train: GearTrain::new(),
            mounts: Vec::new(),
        }
    }

    /// Add a gear to the train and mount it. Gears draw in insertion order.
    pub fn add(
        &mut self,
        id: impl Into<GearId>,
        spec: GearSpec,
        drive: Drive,
        mount: Mount,
    ) -> GearResult<&mut Self> {
        self.train.add(id, spec, drive)?;
        self.mounts.push(mount);
        Ok(self)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    pub fn train(&self) -> &GearTrain {
        &self.train
    }

    pub fn mount(&self, id: &GearId) -> Option<Mount> {
        self.train
            .gears()
            .iter()
            .position(|g| &g.id == id)
            .map(|i| self.mounts[i])
    }

    /// Compose every gear for `time_seconds`, in draw order.
    pub fn frame(&self, time_seconds: f64, cache: &ProfileCache) -> GearResult<Vec<GearFrame>> {
        let rotations = self.train.rotations(time_seconds)?;

        self.train
            .gears()
            .iter()
            .zip(&self.mounts)
            .zip(rotations.iter())
            .map(|((gear, mount), (_, rotation))| -> GearResult<GearFrame> {
                let profile = cache.get_or_generate(gear.spec.teeth, gear.spec.outer_radius)?;
                Ok(GearFrame {
                    id: gear.id.clone(),
                    points: place_profile(&profile, rotation, mount.center),
                    center: mount.center,
                    rotation,
                    color: gear.spec.color,
                    opacity: mount.opacity,
                    outer_radius: profile.outer_radius,
                    hole_radius: profile.hole_radius,
                    label: gear.spec.label.clone(),
                    speed_label: gear.spec.speed_label.clone(),
                })
            })
            .collect()
    }

    /// The gears behind the see-through dial, on a 320x320 viewport.
    ///
    /// The three hand gears share the dial's center. The idler meshes with
    /// the minutes gear and so turns backwards at twice its rate.
    pub fn skeleton_face() -> GearResult<Self> {
        let center = Point::new(160.0, 160.0);
        let mut scene = Self::new(320.0, 320.0);
        scene
            .add(
                "hours",
                GearSpec::new(48, 110.0, palette::RED)?,
                Drive::Hand(Hand::Hours),
                Mount { center, opacity: 0.3 },
            )?
            .add(
                "minutes",
                GearSpec::new(32, 70.0, palette::BLUE)?,
                Drive::Hand(Hand::Minutes),
                Mount { center, opacity: 0.5 },
            )?
            .add(
                "idler",
                GearSpec::new(16, 40.0, palette::SLATE)?,
                Drive::Mesh("minutes".into()),
                Mount {
                    center: Point::new(230.0, 90.0),
                    opacity: 0.6,
                },
            )?
            .add(
                "seconds",
                GearSpec::new(12, 30.0, palette::GREEN)?,
                Drive::Hand(Hand::Seconds),
                Mount { center, opacity: 0.8 },
            )?;
        Ok(scene)
    }

    /// The transmission panel on a 600x300 viewport: each hand gear is
    /// joined to the next by a small pinion that reverses direction.
    pub fn mechanism() -> GearResult<Self> {
        let mount = |x: f64| Mount {
            center: Point::new(x, 150.0),
            opacity: 1.0,
        };
        let mut scene = Self::new(600.0, 300.0);
        scene
            .add(
                "seconds",
                GearSpec::new(12, 50.0, palette::LIGHT_GREEN)?
                    .with_label("SECONDS")
                    .with_speed_label("fastest"),
                Drive::Hand(Hand::Seconds),
                mount(100.0),
            )?
            .add(
                "pinion-seconds",
                GearSpec::new(8, 25.0, palette::SLATE)?,
                Drive::Mesh("seconds".into()),
                mount(175.0),
            )?
            .add(
                "minutes",
                GearSpec::new(24, 60.0, palette::LIGHT_BLUE)?
                    .with_label("MINUTES")
                    .with_speed_label("medium"),
                Drive::Hand(Hand::Minutes),
                mount(250.0),
            )?
            .add(
                "pinion-minutes",
                GearSpec::new(8, 25.0, palette::SLATE)?,
                Drive::Mesh("minutes".into()),
                mount(335.0),
            )?
            .add(
                "hours",
                GearSpec::new(36, 80.0, palette::LIGHT_RED)?
                    .with_label("HOURS")
                    .with_speed_label("slowest"),
                Drive::Hand(Hand::Hours),
                mount(430.0),
            )?;
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_mounts_parallel() {
        let mut scene = Scene::new(100.0, 50.0);
        let spec = GearSpec::new(10, 5.0, Color::White).unwrap();
        let mount = Mount {
            center: Point::new(20.0, 25.0),
            opacity: 1.0,
        };
        scene
            .add("a", spec.clone(), Drive::Hand(Hand::Minutes), mount)
            .unwrap();
        assert!(scene.add("a", spec.clone(), Drive::Hand(Hand::Minutes), mount).is_err());
        assert!(scene.add("b", spec, Drive::Mesh("zz".into()), mount).is_err());
        assert_eq!(scene.train().len(), 1);
        assert_eq!(scene.mount(&"a".into()), Some(mount));
        assert_eq!(scene.aspect(), 2.0);
    }

    #[test]
    fn test_frame_at_zero_is_unrotated() {
        let scene = Scene::skeleton_face().unwrap();
        let cache = ProfileCache::new();
        let frames = scene.frame(0.0, &cache).unwrap();
        assert_eq!(frames.len(), 4);
        for frame in &frames {
            assert_eq!(frame.rotation.abs(), 0.0);
        }
        // One profile per distinct (teeth, radius) pair
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn test_frame_reuses_cached_profiles() {
        let scene = Scene::mechanism().unwrap();
        let cache = ProfileCache::new();
        scene.frame(0.0, &cache).unwrap();
        scene.frame(12.5, &cache).unwrap();
        // The two pinions share one profile
        assert_eq!(cache.len(), 4);
    }
}

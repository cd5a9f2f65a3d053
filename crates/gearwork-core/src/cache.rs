//! Memoized gear profiles.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::error::GearResult;
use crate::geometry::{GearProfile, tooth_profile};

/// Cache key: tooth count plus the exact bits of the radius.
type ProfileKey = (u32, u64);

/// Thread-safe cache of tooth profiles keyed on `(teeth, outer_radius)`.
///
/// Geometry never depends on time, so profiles are generated once per gear
/// and reused on every frame. Invalid specs are never cached.
#[derive(Debug, Default)]
pub struct ProfileCache {
    profiles: RwLock<HashMap<ProfileKey, Arc<GearProfile>>>,
}

impl ProfileCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached profile, generating it on the first request.
    pub fn get_or_generate(&self, teeth: u32, outer_radius: f64) -> GearResult<Arc<GearProfile>> {
        let key = (teeth, outer_radius.to_bits());

        if let Ok(profiles) = self.profiles.read()
            && let Some(profile) = profiles.get(&key)
        {
            return Ok(Arc::clone(profile));
        }

        let profile = Arc::new(tooth_profile(teeth, outer_radius)?);
        debug!(teeth, outer_radius, "generated gear profile");

        match self.profiles.write() {
            // Another caller may have raced us here; keep whichever landed first
            Ok(mut profiles) => Ok(Arc::clone(profiles.entry(key).or_insert(profile))),
            Err(_) => Ok(profile),
        }
    }

    /// Number of cached profiles.
    pub fn len(&self) -> usize {
        self.profiles.read().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached profile, e.g. after a gear spec changes.
    pub fn clear(&self) {
        if let Ok(mut profiles) = self.profiles.write() {
            profiles.clear();
        }
    }
}

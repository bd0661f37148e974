//! Movement domain: ladder exit probe and exit policy.

use bevy::prelude::*;
use serde::Deserialize;

/// How the ground probe and ladder-surface contacts combine into an exit.
///
/// Both policies require zero ground-layer contacts; they differ in what the
/// downward probe must report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum LadderExitPolicy {
    /// Leave the ladder once clear of it and standing over ground.
    #[default]
    GroundBelow,
    /// Leave the ladder once clear of it and nothing is below.
    ClearBelow,
}

impl LadderExitPolicy {
    pub fn should_exit(self, ground_contacts: usize, probe_hit: bool) -> bool {
        if ground_contacts > 0 {
            return false;
        }
        match self {
            LadderExitPolicy::GroundBelow => probe_hit,
            LadderExitPolicy::ClearBelow => !probe_hit,
        }
    }
}

/// Axis-aligned collider bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub center: Vec2,
    pub extents: Vec2,
}

impl Bounds {
    pub fn bottom_center(&self) -> Vec2 {
        Vec2::new(self.center.x, self.center.y - self.extents.y)
    }
}

/// Short downward ray from the bottom-center of the collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LadderProbe {
    pub origin: Vec2,
    pub distance: f32,
}

impl LadderProbe {
    pub fn from_bounds(bounds: Bounds, distance: f32) -> Self {
        Self {
            origin: bounds.bottom_center(),
            distance,
        }
    }

    pub fn end(&self) -> Vec2 {
        self.origin + Vec2::NEG_Y * self.distance
    }
}

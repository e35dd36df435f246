//! Movement domain: tuning and intent resources.

use bevy::prelude::*;

use crate::content::LocomotionDefaults;

/// Locomotion tuning. Applied from loaded defaults when the player spawns and
/// treated as read-only by every system afterwards.
#[derive(Resource, Debug, Clone)]
pub struct LocomotionConfig {
    /// Planar speed cap in units per second.
    pub max_speed: f32,
    /// Per-step velocity change cap in units per second squared.
    pub acceleration: f32,
    /// Heading change cap in degrees per second. Zero disables rotation.
    pub rotation_speed: f32,
    /// Collider friction coefficient. None skips the component at spawn.
    pub friction: Option<f32>,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            max_speed: 5.0,
            acceleration: 20.0,
            rotation_speed: 360.0,
            friction: None,
        }
    }
}

impl LocomotionConfig {
    pub fn from_defaults(defaults: &LocomotionDefaults) -> Self {
        Self {
            max_speed: defaults.max_speed,
            acceleration: defaults.acceleration,
            rotation_speed: defaults.rotation_speed,
            friction: defaults.friction,
        }
    }
}

/// Planar movement intent, the one slot shared between the frame-rate sampler
/// and the fixed-rate integrator. `x` maps to world X and `y` to world Z, so
/// forward (the W key) points toward -Z. Magnitude never exceeds 1; any
/// sub-unit vector passes through as-is, which leaves room for analog sources.
#[derive(Resource, Debug, Default)]
pub struct MoveIntent {
    pub planar: Vec2,
}

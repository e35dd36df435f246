//! Data definitions for the RON tuning files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. Both carry compiled fallbacks so the sandbox still
//! runs when the data files are missing or rejected.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Locomotion tuning (locomotion.ron).
#[derive(Debug, Clone, Deserialize, Serialize, Reflect, Resource)]
pub struct LocomotionDefaults {
    pub schema_version: u32,
    /// Planar speed cap in units per second.
    pub max_speed: f32,
    /// Per-step velocity change cap in units per second squared.
    pub acceleration: f32,
    /// Heading change cap in degrees per second. Zero disables rotation.
    pub rotation_speed: f32,
    /// Collider friction coefficient. Absent leaves the collider default.
    #[serde(default)]
    pub friction: Option<f32>,
}

impl Default for LocomotionDefaults {
    fn default() -> Self {
        Self {
            schema_version: 1,
            max_speed: 5.0,
            acceleration: 20.0,
            rotation_speed: 360.0,
            friction: None,
        }
    }
}

/// Arena layout tuning (arena.ron).
#[derive(Debug, Clone, Deserialize, Serialize, Reflect, Resource)]
pub struct ArenaDefaults {
    pub schema_version: u32,
    /// Half the side length of the square ground slab, in units.
    pub half_extent: f32,
    /// Number of obstacle blocks scattered across the slab.
    pub obstacle_count: usize,
    pub obstacle_min_size: f32,
    pub obstacle_max_size: f32,
}

impl Default for ArenaDefaults {
    fn default() -> Self {
        Self {
            schema_version: 1,
            half_extent: 20.0,
            obstacle_count: 12,
            obstacle_min_size: 0.8,
            obstacle_max_size: 2.4,
        }
    }
}

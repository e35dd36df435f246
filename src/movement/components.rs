//! Movement domain: components and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground slab
    Ground,
    /// Player body
    Player,
    /// Scattered obstacle blocks
    Obstacle,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for the ground collider
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for obstacle colliders
#[derive(Component, Debug)]
pub struct Obstacle;

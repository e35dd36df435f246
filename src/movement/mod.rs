//! Movement domain: locomotion plugin wiring and public exports.
//!
//! Input is sampled once per rendered frame into [`MoveIntent`]; the
//! fixed-rate systems read that slot each simulation step and write velocity
//! and heading onto the physics body before avian steps the world.

mod components;
mod resources;
mod spawn;
mod systems;


pub use components::{GameLayer, Ground, Obstacle, Player};
pub use resources::{LocomotionConfig, MoveIntent};

use bevy::prelude::*;

use crate::movement::spawn::{spawn_player, verify_player_physics};
use crate::movement::systems::{integrate_planar_velocity, orient_to_heading, read_move_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionConfig>()
            .init_resource::<MoveIntent>()
            .add_systems(Startup, spawn_player)
            .add_systems(PostStartup, verify_player_physics)
            .add_systems(Update, read_move_input)
            .add_systems(
                FixedUpdate,
                (integrate_planar_velocity, orient_to_heading).chain(),
            );
    }
}

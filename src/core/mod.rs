//! Core domain: simulation clock, sandbox configuration, and camera setup.

mod resources;
mod systems;

pub use resources::SandboxConfig;

use bevy::prelude::*;

use crate::core::systems::setup_camera;

/// Fixed simulation rate in steps per second.
pub const SIMULATION_HZ: f64 = 50.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
            .init_resource::<SandboxConfig>()
            .add_systems(Startup, setup_camera);
    }
}

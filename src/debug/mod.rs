//! Debug domain: dev-tools overlay and runtime sanity checks.
//!
//! Compiled only with the `dev-tools` feature. F1 or backtick toggles an
//! info overlay showing the body's position, planar speed, heading, and the
//! arena seed. A fixed-rate watchdog logs if anything pushes the body past
//! the configured speed cap.

mod state;
mod systems;
mod ui;

use avian3d::prelude::*;
use bevy::prelude::*;

pub use state::DebugState;

use crate::debug::systems::{check_speed_cap, toggle_info_overlay, update_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (
                    toggle_info_overlay,
                    update_info_overlay.run_if(|state: Res<DebugState>| state.show_info),
                )
                    .chain(),
            )
            .add_systems(
                FixedPostUpdate,
                check_speed_cap.before(PhysicsSet::Prepare),
            );
    }
}

//! Arena domain: the static sandbox the body moves through.
//!
//! A flat slab with its top surface at y = 0 plus a seed-scattered field of
//! static blocks. The layout is deterministic per seed so a run can be
//! replayed by pinning `SandboxConfig`.

mod spawn;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::arena::spawn::spawn_arena;

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_arena);
    }
}

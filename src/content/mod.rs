//! Content domain: data-driven tuning loaded from RON files.

mod data;
mod loader;
mod validation;


pub use data::{ArenaDefaults, LocomotionDefaults};

use bevy::prelude::*;

use crate::content::loader::load_tuning;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<LocomotionDefaults>()
            .register_type::<ArenaDefaults>()
            .add_systems(PreStartup, load_tuning);
    }
}

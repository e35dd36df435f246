//! Debug domain: state for the dev-tools overlay.

use bevy::prelude::*;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the info overlay (position, speed, heading) is visible
    pub show_info: bool,
}

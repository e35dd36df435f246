//! Debug domain: overlay input, readout, and the speed-cap watchdog.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::core::SandboxConfig;
use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::movement::{LocomotionConfig, MoveIntent, Player};

/// Planar speed above the cap tolerated before the watchdog logs.
const SPEED_CAP_TOLERANCE: f32 = 1e-3;

/// Toggle the info overlay with F1 or the backtick key
pub(crate) fn toggle_info_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    let toggle = keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote);

    if toggle {
        debug_state.show_info = !debug_state.show_info;
        let msg = if debug_state.show_info {
            "Info overlay ON"
        } else {
            "Info overlay OFF"
        };
        info!("[DEBUG] {}", msg);

        if debug_state.show_info {
            spawn_debug_info_overlay(&mut commands);
        } else {
            for entity in &existing_overlay {
                commands.entity(entity).despawn();
            }
        }
    }
}

/// Update the info overlay with the current body state
pub(crate) fn update_info_overlay(
    config: Res<LocomotionConfig>,
    intent: Res<MoveIntent>,
    sandbox: Res<SandboxConfig>,
    player_query: Query<(&Transform, &LinearVelocity), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if let (Some((transform, velocity)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        let pos = transform.translation;
        let planar_speed = Vec2::new(velocity.x, velocity.z).length();
        let yaw = transform.rotation.to_euler(EulerRot::YXZ).0.to_degrees();
        **text = format!(
            "Pos: ({:.1}, {:.1}, {:.1})\nSpeed: {:.2}/{:.1}\nHeading: {:.0} deg\nIntent: ({:.2}, {:.2})\nSeed: {}",
            pos.x,
            pos.y,
            pos.z,
            planar_speed,
            config.max_speed,
            yaw,
            intent.planar.x,
            intent.planar.y,
            sandbox.seed
        );
    }
}

/// Log when a body leaves a fixed step faster than the configured cap.
///
/// The integrator re-clamps every step, so a hit here means some other
/// writer touched the velocity after it ran.
pub(crate) fn check_speed_cap(
    config: Res<LocomotionConfig>,
    query: Query<(&LinearVelocity, &Transform), With<Player>>,
) {
    for (velocity, transform) in &query {
        let planar_speed = Vec2::new(velocity.x, velocity.z).length();
        if planar_speed > config.max_speed + SPEED_CAP_TOLERANCE {
            warn!(
                "[DEBUG] Planar speed {:.3} exceeds cap {:.3} at {:?}",
                planar_speed, config.max_speed, transform.translation
            );
        }
    }
}

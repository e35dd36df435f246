//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MoveIntent;

pub(crate) fn read_move_input(keyboard: Res<ButtonInput<KeyCode>>, mut intent: ResMut<MoveIntent>) {
    // East-west axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // North-south axis (forward is -Z)
    let mut z = 0.0;
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        z -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        z += 1.0;
    }

    // Diagonals rescale to unit length; shorter vectors pass through untouched.
    intent.planar = Vec2::new(x, z).clamp_length_max(1.0);
}

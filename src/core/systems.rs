//! Core domain: camera setup.

use bevy::prelude::*;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 14.0, 16.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

//! Movement domain: fixed-step velocity integration and heading control.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{LocomotionConfig, MoveIntent, Player};

/// Intents with squared magnitude below this count as released.
pub(crate) const INTENT_EPSILON: f32 = 1e-4;

/// Drive the planar velocity toward the intent's target, one fixed step at a
/// time. Runs before the physics step, so the write lands in the same tick.
pub(crate) fn integrate_planar_velocity(
    time: Res<Time>,
    intent: Res<MoveIntent>,
    config: Res<LocomotionConfig>,
    mut query: Query<&mut LinearVelocity, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut velocity in &mut query {
        velocity.0 = step_planar_velocity(velocity.0, intent.planar, &config, dt);
    }
}

/// Turn the body toward the intent direction at the configured angular rate.
pub(crate) fn orient_to_heading(
    time: Res<Time>,
    intent: Res<MoveIntent>,
    config: Res<LocomotionConfig>,
    mut query: Query<&mut Rotation, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut rotation in &mut query {
        if let Some(next) = heading_step(rotation.0, intent.planar, &config, dt) {
            // Direct write: a kinematic orientation set, no torque involved.
            rotation.0 = next;
        }
    }
}

/// Advance `velocity` one fixed step toward `intent * max_speed`.
///
/// The change applied here never exceeds `acceleration * dt` in length, and
/// the vertical component passes through untouched. The final clamp is a hard
/// post-condition: planar speed never leaves this function above `max_speed`,
/// even when another writer raised it earlier in the same step.
pub(crate) fn step_planar_velocity(
    velocity: Vec3,
    intent: Vec2,
    config: &LocomotionConfig,
    dt: f32,
) -> Vec3 {
    let horizontal = Vec3::new(velocity.x, 0.0, velocity.z);
    let target = Vec3::new(intent.x, 0.0, intent.y) * config.max_speed;
    let change = (target - horizontal).clamp_length_max(config.acceleration * dt);

    clamp_planar_speed(velocity + change, config.max_speed)
}

/// Rescale the planar part of `velocity` to exactly `max_speed` when it sits
/// above the cap. Direction and vertical velocity are preserved.
pub(crate) fn clamp_planar_speed(velocity: Vec3, max_speed: f32) -> Vec3 {
    let planar = Vec2::new(velocity.x, velocity.z);
    let speed = planar.length();
    if speed <= max_speed {
        return velocity;
    }

    let scaled = planar * (max_speed / speed);
    Vec3::new(scaled.x, velocity.y, scaled.y)
}

/// One heading step toward the intent direction. Returns None when heading
/// control is off (`rotation_speed` zero) or the intent is released, leaving
/// the current orientation frozen.
pub(crate) fn heading_step(
    current: Quat,
    intent: Vec2,
    config: &LocomotionConfig,
    dt: f32,
) -> Option<Quat> {
    if config.rotation_speed <= 0.0 {
        return None;
    }
    if intent.length_squared() < INTENT_EPSILON {
        return None;
    }

    let target = heading_rotation(Vec3::new(intent.x, 0.0, intent.y));
    let max_step = (config.rotation_speed * dt).to_radians();

    Some(rotate_towards(current, target, max_step))
}

/// Yaw whose forward (-Z) axis points along `direction`, up fixed to +Y.
pub(crate) fn heading_rotation(direction: Vec3) -> Quat {
    Quat::from_rotation_y(f32::atan2(-direction.x, -direction.z))
}

/// Step `current` toward `target` along the shortest path, by at most
/// `max_angle` radians. Lands exactly on `target` once in range, so repeated
/// calls settle instead of oscillating.
pub(crate) fn rotate_towards(current: Quat, target: Quat, max_angle: f32) -> Quat {
    let angle = current.angle_between(target);
    if angle <= max_angle {
        return target;
    }

    current.slerp(target, max_angle / angle)
}

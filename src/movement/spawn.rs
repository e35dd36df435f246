//! Movement domain: player bootstrap and startup verification.

use avian3d::prelude::*;
use bevy::ecs::query::QuerySingleError;
use bevy::prelude::*;

use crate::content::LocomotionDefaults;
use crate::movement::{GameLayer, LocomotionConfig, Player};

pub(crate) fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    defaults: Res<LocomotionDefaults>,
    mut config: ResMut<LocomotionConfig>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    *config = LocomotionConfig::from_defaults(&defaults);

    info!(
        "Spawning player: max_speed={}, acceleration={}, rotation_speed={} deg/s, friction={:?}",
        config.max_speed, config.acceleration, config.rotation_speed, config.friction
    );

    let mut player = commands.spawn((
        Player,
        // Rendering
        Mesh3d(meshes.add(Capsule3d::new(0.4, 1.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.9))),
        Transform::from_xyz(0.0, 1.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::capsule(0.4, 1.0),
            // Dynamics may only spin the body about the vertical axis;
            // heading writes go through Rotation directly and bypass these.
            LockedAxes::new().lock_rotation_x().lock_rotation_z(),
            LinearVelocity::default(),
            TransformInterpolation,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Obstacle]),
        ),
    ));

    // Optional material; leaving it off keeps the collider default.
    if let Some(coefficient) = config.friction {
        player.insert(Friction::new(coefficient));
    }
}

/// Aborts startup if the player body is missing any physics component the
/// fixed-step systems rely on.
pub(crate) fn verify_player_physics(
    query: Query<(Has<RigidBody>, Has<Collider>, Has<LinearVelocity>), With<Player>>,
) {
    let (has_body, has_collider, has_velocity) = match query.single() {
        Ok(flags) => flags,
        Err(QuerySingleError::NoEntities(_)) => panic!("No player body found after startup"),
        Err(QuerySingleError::MultipleEntities(_)) => {
            panic!("Multiple player bodies found after startup")
        }
    };

    if !(has_body && has_collider && has_velocity) {
        panic!(
            "Player body is missing physics components: rigid_body={}, collider={}, velocity={}",
            has_body, has_collider, has_velocity
        );
    }
}

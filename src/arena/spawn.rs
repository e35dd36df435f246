//! Arena domain: sandbox environment spawning.

use avian3d::prelude::*;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::ArenaDefaults;
use crate::core::SandboxConfig;
use crate::movement::{GameLayer, Ground, Obstacle};

/// Blocks never land within this distance of the spawn point at the center.
pub(super) const SPAWN_CLEARANCE: f32 = 3.0;

/// Block height band. Footprints come from tuning; height is cosmetic and
/// shared by every arena.
pub(super) const OBSTACLE_MIN_HEIGHT: f32 = 0.6;
pub(super) const OBSTACLE_MAX_HEIGHT: f32 = 1.8;

pub(crate) fn spawn_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    defaults: Res<ArenaDefaults>,
    sandbox: Res<SandboxConfig>,
) {
    let layout = obstacle_layout(sandbox.seed, &defaults);

    info!(
        "Spawning arena: half_extent={}, obstacles={} (seed: {})",
        defaults.half_extent,
        layout.len(),
        sandbox.seed
    );

    let ground_color = Color::srgb(0.35, 0.4, 0.35);
    let obstacle_color = Color::srgb(0.45, 0.4, 0.5);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let obstacle_layers = CollisionLayers::new(GameLayer::Obstacle, [GameLayer::Player]);

    // Ground slab with its top surface at y = 0
    let side = defaults.half_extent * 2.0;
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Cuboid::new(side, 0.5, side))),
        MeshMaterial3d(materials.add(ground_color)),
        Transform::from_xyz(0.0, -0.25, 0.0),
        RigidBody::Static,
        Collider::cuboid(side, 0.5, side),
        ground_layers,
    ));

    // Seed-scattered obstacle blocks resting on the slab
    let obstacle_material = materials.add(obstacle_color);
    for (position, size) in layout {
        commands.spawn((
            Obstacle,
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(obstacle_material.clone()),
            Transform::from_translation(position),
            RigidBody::Static,
            Collider::cuboid(size.x, size.y, size.z),
            obstacle_layers,
        ));
    }

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 16.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Deterministic obstacle layout for a seed: (center, full size) pairs with
/// every block resting on the slab, clear of the spawn point at the origin.
pub(crate) fn obstacle_layout(seed: u64, defaults: &ArenaDefaults) -> Vec<(Vec3, Vec3)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    // Keep whole blocks on the slab even at the edge of the sampling range.
    let range = (defaults.half_extent - defaults.obstacle_max_size).max(1.0);
    let max_attempts = defaults.obstacle_count * 20;

    let mut layout = Vec::with_capacity(defaults.obstacle_count);
    let mut attempts = 0;
    while layout.len() < defaults.obstacle_count && attempts < max_attempts {
        attempts += 1;

        let x = rng.random_range(-range..range);
        let z = rng.random_range(-range..range);
        if x.abs() < SPAWN_CLEARANCE && z.abs() < SPAWN_CLEARANCE {
            continue;
        }

        let width = rng.random_range(defaults.obstacle_min_size..=defaults.obstacle_max_size);
        let depth = rng.random_range(defaults.obstacle_min_size..=defaults.obstacle_max_size);
        let height = rng.random_range(OBSTACLE_MIN_HEIGHT..OBSTACLE_MAX_HEIGHT);

        layout.push((
            Vec3::new(x, height * 0.5, z),
            Vec3::new(width, height, depth),
        ));
    }

    layout
}

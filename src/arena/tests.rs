//! Arena layout tests.

use crate::content::ArenaDefaults;

use super::spawn::{OBSTACLE_MAX_HEIGHT, OBSTACLE_MIN_HEIGHT, SPAWN_CLEARANCE, obstacle_layout};

// -----------------------------------------------------------------------------
// Determinism
// -----------------------------------------------------------------------------

#[test]
fn test_same_seed_same_layout() {
    let defaults = ArenaDefaults::default();

    let first = obstacle_layout(7, &defaults);
    let second = obstacle_layout(7, &defaults);

    assert_eq!(first, second);
}

#[test]
fn test_different_seeds_differ() {
    let defaults = ArenaDefaults::default();

    let first = obstacle_layout(1, &defaults);
    let second = obstacle_layout(2, &defaults);

    assert_ne!(first, second);
}

#[test]
fn test_layout_fills_requested_count() {
    let defaults = ArenaDefaults::default();

    let layout = obstacle_layout(42, &defaults);

    assert_eq!(layout.len(), defaults.obstacle_count);
}

// -----------------------------------------------------------------------------
// Placement bounds
// -----------------------------------------------------------------------------

#[test]
fn test_blocks_stay_on_the_slab() {
    let defaults = ArenaDefaults::default();

    for (position, size) in obstacle_layout(42, &defaults) {
        assert!(
            position.x.abs() + size.x * 0.5 <= defaults.half_extent,
            "block at x={} with width {} overhangs the slab",
            position.x,
            size.x
        );
        assert!(
            position.z.abs() + size.z * 0.5 <= defaults.half_extent,
            "block at z={} with depth {} overhangs the slab",
            position.z,
            size.z
        );
        assert_eq!(position.y, size.y * 0.5, "block does not rest on the slab");
    }
}

#[test]
fn test_spawn_point_kept_clear() {
    let defaults = ArenaDefaults::default();

    for (position, _) in obstacle_layout(42, &defaults) {
        assert!(
            !(position.x.abs() < SPAWN_CLEARANCE && position.z.abs() < SPAWN_CLEARANCE),
            "block at ({}, {}) crowds the spawn point",
            position.x,
            position.z
        );
    }
}

#[test]
fn test_sizes_within_configured_bounds() {
    let defaults = ArenaDefaults::default();

    for (_, size) in obstacle_layout(42, &defaults) {
        assert!(size.x >= defaults.obstacle_min_size && size.x <= defaults.obstacle_max_size);
        assert!(size.z >= defaults.obstacle_min_size && size.z <= defaults.obstacle_max_size);
        assert!(size.y >= OBSTACLE_MIN_HEIGHT && size.y < OBSTACLE_MAX_HEIGHT);
    }
}

#[test]
fn test_tiny_arena_yields_no_blocks_without_panicking() {
    let defaults = ArenaDefaults {
        half_extent: 1.0,
        ..ArenaDefaults::default()
    };

    // Every sample lands inside the spawn clearance, so the placement loop
    // gives up with nothing placed.
    let layout = obstacle_layout(42, &defaults);

    assert!(layout.is_empty());
}

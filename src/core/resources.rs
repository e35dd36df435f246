//! Core domain: shared resources for sandbox configuration.

use bevy::prelude::*;
use rand::Rng;

/// Per-run sandbox settings. The seed drives the arena layout so a run can be
/// reproduced by reusing it.
#[derive(Resource, Debug)]
pub struct SandboxConfig {
    pub seed: u64,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}

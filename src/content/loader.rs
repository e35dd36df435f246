//! Loader for RON tuning files at startup.

use bevy::prelude::*;
use std::fs;
use std::path::Path;

use super::data::{ArenaDefaults, LocomotionDefaults};
use super::validation::{validate_arena, validate_locomotion};

/// Error type for tuning-file loading failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Read and parse one RON tuning struct. IMPLICIT_SOME is enabled so optional
/// fields like `friction` take plain values.
pub(super) fn load_tuning_file<T>(path: &Path) -> Result<T, TuningLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron::Options::default()
        .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
        .from_str(&contents)
        .map_err(|e| TuningLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

/// Load locomotion and arena tuning from assets/data/*.ron.
/// Files that fail to load or validate are replaced by compiled defaults;
/// tuning data is never load-bearing.
pub(crate) fn load_tuning(mut commands: Commands) {
    let base_path = Path::new("assets/data");

    commands.insert_resource(load_locomotion(base_path));
    commands.insert_resource(load_arena(base_path));
}

pub(super) fn load_locomotion(base_path: &Path) -> LocomotionDefaults {
    let path = base_path.join("locomotion.ron");
    let loaded = match load_tuning_file::<LocomotionDefaults>(&path) {
        Ok(defaults) => defaults,
        Err(e) => {
            error!("{}", e);
            warn!("Falling back to compiled locomotion defaults");
            return LocomotionDefaults::default();
        }
    };

    let errors = validate_locomotion(&loaded);
    if !errors.is_empty() {
        for error in &errors {
            error!("{}", error);
        }
        warn!("Falling back to compiled locomotion defaults");
        return LocomotionDefaults::default();
    }

    info!(
        "Loaded locomotion tuning: max_speed={}, acceleration={}, rotation_speed={} deg/s",
        loaded.max_speed, loaded.acceleration, loaded.rotation_speed
    );
    loaded
}

pub(super) fn load_arena(base_path: &Path) -> ArenaDefaults {
    let path = base_path.join("arena.ron");
    let loaded = match load_tuning_file::<ArenaDefaults>(&path) {
        Ok(defaults) => defaults,
        Err(e) => {
            error!("{}", e);
            warn!("Falling back to compiled arena defaults");
            return ArenaDefaults::default();
        }
    };

    let errors = validate_arena(&loaded);
    if !errors.is_empty() {
        for error in &errors {
            error!("{}", error);
        }
        warn!("Falling back to compiled arena defaults");
        return ArenaDefaults::default();
    }

    info!(
        "Loaded arena tuning: half_extent={}, obstacles={}",
        loaded.half_extent, loaded.obstacle_count
    );
    loaded
}

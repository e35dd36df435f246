//! Validation for numeric ranges in tuning definitions.

use super::data::{ArenaDefaults, LocomotionDefaults};

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} field '{}': {}",
            self.source_type, self.field, self.message
        )
    }
}

/// Helper macro for checking a numeric bound. A NaN value fails every bound.
macro_rules! check_bound {
    ($errors:expr, $source_type:expr, $field:expr, $ok:expr, $message:expr) => {
        if !$ok {
            $errors.push(ValidationError {
                source_type: $source_type,
                field: $field,
                message: $message,
            });
        }
    };
}

/// Validate locomotion tuning ranges.
/// Returns a list of validation errors, empty if all values are usable.
pub fn validate_locomotion(defaults: &LocomotionDefaults) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_bound!(
        errors,
        "Locomotion",
        "max_speed",
        defaults.max_speed > 0.0,
        format!("must be positive, got {}", defaults.max_speed)
    );
    check_bound!(
        errors,
        "Locomotion",
        "acceleration",
        defaults.acceleration > 0.0,
        format!("must be positive, got {}", defaults.acceleration)
    );
    check_bound!(
        errors,
        "Locomotion",
        "rotation_speed",
        defaults.rotation_speed >= 0.0,
        format!("must not be negative, got {}", defaults.rotation_speed)
    );
    if let Some(friction) = defaults.friction {
        check_bound!(
            errors,
            "Locomotion",
            "friction",
            friction >= 0.0,
            format!("must not be negative, got {}", friction)
        );
    }

    errors
}

/// Validate arena layout ranges.
/// Returns a list of validation errors, empty if all values are usable.
pub fn validate_arena(defaults: &ArenaDefaults) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_bound!(
        errors,
        "Arena",
        "half_extent",
        defaults.half_extent > 0.0,
        format!("must be positive, got {}", defaults.half_extent)
    );
    check_bound!(
        errors,
        "Arena",
        "obstacle_min_size",
        defaults.obstacle_min_size > 0.0,
        format!("must be positive, got {}", defaults.obstacle_min_size)
    );
    check_bound!(
        errors,
        "Arena",
        "obstacle_max_size",
        defaults.obstacle_max_size >= defaults.obstacle_min_size,
        format!(
            "must be at least obstacle_min_size ({}), got {}",
            defaults.obstacle_min_size, defaults.obstacle_max_size
        )
    );

    errors
}

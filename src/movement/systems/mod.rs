//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;
pub(crate) mod locomotion;

pub(crate) use input::read_move_input;
pub(crate) use locomotion::{integrate_planar_velocity, orient_to_heading};

//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `g` and minimum pair distance,
//! - time scale applied to each frame's elapsed time,
//! - collision toggle and the soft body-count cap
//!
//! A value is immutable once built; edits produce a new value via
//! [`Parameters::merged`] which the engine swaps in between frames.

use crate::configuration::config::ParametersConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub time_scale: f64, // multiplier on elapsed time, 0 freezes physics
    pub min_distance: f64, // floor on pair separation in force terms
    pub collisions_enabled: bool, // merge overlapping bodies
    pub max_bodies: usize, // soft cap, checked by callers before adding
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: 1.0,
            time_scale: 1.0,
            min_distance: 0.5,
            collisions_enabled: true,
            max_bodies: 200,
        }
    }
}

impl Parameters {
    /// Copy of `self` with every field present in `patch` replaced
    pub fn merged(&self, patch: &ParametersConfig) -> Self {
        Self {
            g: patch.g.unwrap_or(self.g),
            time_scale: patch.time_scale.unwrap_or(self.time_scale),
            min_distance: patch.min_distance.unwrap_or(self.min_distance),
            collisions_enabled: patch.collisions_enabled.unwrap_or(self.collisions_enabled),
            max_bodies: patch.max_bodies.unwrap_or(self.max_bodies),
        }
    }
}

//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and engine switches; every
//!   field is optional, so the same type doubles as a partial config patch
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   G: 1.0                  # gravitational constant
//!   time_scale: 1.0         # 0 freezes physics
//!   min_distance: 0.5       # separation floor in force terms
//!   collisions_enabled: true
//!   max_bodies: 200         # soft cap
//!
//! bodies:
//!   - x: [ -10.0, 0.0, 0.0 ]
//!     v: [   0.0, 0.0, 3.0 ]
//!     m: 500.0
//!     radius: 1.0           # optional, derived from mass when absent
//!     color: [1.0, 0.8, 0.3] # optional renderer hint
//!   - x: [ 10.0, 0.0, 0.0 ]
//!     v: [  0.0, 0.0, -3.0 ]
//!     m: 500.0
//! ```
//!
//! Unknown keys are ignored. The camelCase spellings used by web front ends
//! (`timeScale`, `minDistance`, ...) are accepted as aliases.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::ScenarioError;
use crate::simulation::states::ColorHint;

/// Partial engine configuration. `None` keeps the current value
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ParametersConfig {
    #[serde(rename = "G", alias = "g", default)]
    pub g: Option<f64>, // gravitational constant

    #[serde(alias = "timeScale", default)]
    pub time_scale: Option<f64>, // elapsed-time multiplier

    #[serde(alias = "minDistance", default)]
    pub min_distance: Option<f64>, // separation floor

    #[serde(alias = "collisionsEnabled", default)]
    pub collisions_enabled: Option<bool>, // merge on overlap

    #[serde(alias = "maxBodies", default)]
    pub max_bodies: Option<usize>, // soft cap on body count
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 3], // Initial position in simulation units
    pub v: [f64; 3], // Initial velocity in simulation units per time unit
    pub m: f64, // Mass of the body
    #[serde(default)]
    pub radius: Option<f64>, // Collision radius, derived from mass when absent
    #[serde(default)]
    pub color: Option<ColorHint>, // Renderer hint, passed through untouched
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig, // Physical constants and engine switches
    #[serde(default)]
    pub bodies: Vec<BodyConfig>, // Bodies that define the initial state of the system
}

impl ScenarioConfig {
    pub fn from_yaml_str(src: &str) -> Result<Self, ScenarioError> {
        Ok(serde_yaml::from_str(src)?)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ScenarioError> {
        let file = File::open(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}

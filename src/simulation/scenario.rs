//! Build a ready-to-run engine from a scenario configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing), checks it, and produces an
//! [`Engine`] with the configured parameters and every body inserted in
//! file order. Bodies past the `max_bodies` soft cap are dropped with a
//! warning instead of failing the whole load.

use tracing::{info, warn};

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::ScenarioError;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, NewBody};

pub struct Scenario;

impl Scenario {
    pub fn build(cfg: ScenarioConfig) -> Result<Engine, ScenarioError> {
        let params = Parameters::default().merged(&cfg.parameters);
        validate_parameters(&params)?;

        for (index, bc) in cfg.bodies.iter().enumerate() {
            validate_body(index, bc)?;
        }

        let mut engine = Engine::new(params);
        let mut skipped = 0;
        for bc in &cfg.bodies {
            if !engine.has_capacity() {
                skipped += 1;
                continue;
            }
            engine.add_body(new_body(bc));
        }

        if skipped > 0 {
            warn!(skipped, max_bodies = params.max_bodies, "scenario exceeds body cap");
        }
        info!(bodies = engine.body_count(), g = params.g, "scenario loaded");
        Ok(engine)
    }

    pub fn from_yaml_str(src: &str) -> Result<Engine, ScenarioError> {
        Self::build(ScenarioConfig::from_yaml_str(src)?)
    }
}

/// Map a `BodyConfig` to an add request using nalgebra vectors
fn new_body(bc: &BodyConfig) -> NewBody {
    NewBody {
        m: bc.m,
        x: NVec3::from(bc.x),
        v: NVec3::from(bc.v),
        radius: bc.radius,
        color: bc.color,
    }
}

fn validate_body(index: usize, bc: &BodyConfig) -> Result<(), ScenarioError> {
    if !(bc.m.is_finite() && bc.m > 0.0) {
        return Err(ScenarioError::InvalidBody { index, reason: "mass must be positive and finite" });
    }
    if let Some(r) = bc.radius {
        if !(r.is_finite() && r > 0.0) {
            return Err(ScenarioError::InvalidBody { index, reason: "radius must be positive and finite" });
        }
    }
    if bc.x.iter().chain(bc.v.iter()).any(|c| !c.is_finite()) {
        return Err(ScenarioError::InvalidBody { index, reason: "position and velocity must be finite" });
    }
    Ok(())
}

fn validate_parameters(p: &Parameters) -> Result<(), ScenarioError> {
    if !p.g.is_finite() {
        return Err(ScenarioError::InvalidParameter { name: "G", reason: "must be finite" });
    }
    if !(p.time_scale.is_finite() && p.time_scale >= 0.0) {
        return Err(ScenarioError::InvalidParameter { name: "time_scale", reason: "must be finite and non-negative" });
    }
    if !(p.min_distance.is_finite() && p.min_distance > 0.0) {
        return Err(ScenarioError::InvalidParameter { name: "min_distance", reason: "must be positive and finite" });
    }
    Ok(())
}

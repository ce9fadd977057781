//! Core state types for the N-body simulation.
//!
//! Defines the 3D `Body` record stored by the engine, its stable `BodyId`,
//! the request/patch types used to create and edit bodies, and the
//! mass -> radius mapping used when a caller does not supply a radius.

use nalgebra::Vector3;
use serde::Deserialize;
use std::fmt;

pub type NVec3 = Vector3<f64>;

/// Smallest mass the store accepts; anything below is clamped up to it
pub const MIN_MASS: f64 = 1.0e-9;

/// Smallest radius the store accepts; anything below is clamped up to it
pub const MIN_RADIUS: f64 = 1.0e-9;

const RADIUS_BASE: f64 = 0.2;
const RADIUS_LOG_SCALE: f64 = 0.5;

/// Stable identifier of a body. Allocated monotonically, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque RGB hint for the renderer. The physics never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ColorHint(pub [f32; 3]);

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub m: f64, // mass
    pub radius: f64, // collision radius
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub a: NVec3, // acceleration from the most recent force pass
    pub a_prev: Option<NVec3>, // acceleration at the start of the current substep
    pub color: Option<ColorHint>,
    pub(crate) integrated: bool, // has been through at least one substep
}

impl Body {
    pub fn momentum(&self) -> NVec3 {
        self.m * self.v
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }

    /// True once the integrator has stepped this body at least once
    pub fn is_integrated(&self) -> bool {
        self.integrated
    }
}

/// Everything needed to create a body. `radius` falls back to
/// [`radius_for_mass`] when absent.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBody {
    pub m: f64,
    pub x: NVec3,
    pub v: NVec3,
    pub radius: Option<f64>,
    pub color: Option<ColorHint>,
}

impl NewBody {
    pub fn new(m: f64, x: NVec3, v: NVec3) -> Self {
        Self {
            m,
            x,
            v,
            radius: None,
            color: None,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_color(mut self, color: ColorHint) -> Self {
        self.color = Some(color);
        self
    }
}

/// Partial edit of a live body. Mass and radius are independent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyUpdate {
    pub m: Option<f64>,
    pub radius: Option<f64>,
    pub v: Option<NVec3>,
}

/// Default radius for a body of mass `m`: grows logarithmically so heavy
/// bodies stay on screen without swallowing their neighbours
pub fn radius_for_mass(m: f64) -> f64 {
    RADIUS_BASE + RADIUS_LOG_SCALE * m.max(0.0).ln_1p()
}

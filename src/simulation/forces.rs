//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait, the set that sums registered terms, and
//! direct O(n^2) Newtonian gravity with a minimum-distance floor

use crate::simulation::states::{Body, NVec3};

/// Collection of acceleration terms (gravity, drag, etc)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute total accelerations for all `bodies`
    /// - `out[i]` is zeroed, then set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, bodies: &[Body], out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(bodies, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Acceleration source operating on the live body slice
/// Implementations add (never overwrite) their contribution into `out[i]`
pub trait Acceleration {
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec3]);
}

/// Newtonian gravity, direct pairwise sum
/// Separations below `min_distance` are floored to it, trading short-range
/// accuracy for bounded forces when two bodies nearly coincide
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub min_distance: f64, // distance floor
}

impl NewtonianGravity {
    /// Force magnitude between masses `m_a` and `m_b` at separation `d`
    pub fn pair_force(&self, m_a: f64, m_b: f64, d: f64) -> f64 {
        let d = d.max(self.min_distance);
        self.g * m_a * m_b / (d * d)
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec3]) {
        let n = bodies.len();
        if n < 2 { // Nothing to pair up
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &bodies[i];

            for j in (i + 1)..n {
                let bj = &bodies[j];

                // r points from i to j: i is pulled along +r, j along -r
                let r = bj.x - bi.x;
                let d = r.norm();

                // Coincident bodies have no direction to pull along
                let Some(dir) = r.try_normalize(0.0) else {
                    continue;
                };

                let f = self.pair_force(bi.m, bj.m, d);

                // Equal and opposite
                out[i] += dir * (f / bi.m);
                out[j] -= dir * (f / bj.m);
            }
        }
    }
}

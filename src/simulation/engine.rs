//! Runtime engine: the caller-facing API around the body store
//!
//! Owns the bodies, the active [`Parameters`] and the force set, and drives
//! one frame at a time through [`Engine::update`]. Collision outcomes come
//! back as data so the caller can mirror them in its own visuals.

use tracing::trace;

use crate::configuration::config::ParametersConfig;
use crate::simulation::collision::{resolve_collisions, CollisionEvent};
use crate::simulation::energy;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::{substep_count, verlet_substep};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyId, BodyUpdate, NewBody, NVec3};
use crate::simulation::store::BodyStore;

pub struct Engine {
    store: BodyStore,
    params: Parameters,
    forces: AccelSet,
    scratch: Vec<NVec3>, // reusable acceleration buffer
    t: f64, // simulated time
    last_substeps: usize,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Parameters::default())
    }
}

impl Engine {
    pub fn new(params: Parameters) -> Self {
        Self {
            store: BodyStore::new(),
            forces: gravity_set(&params),
            params,
            scratch: Vec::new(),
            t: 0.0,
            last_substeps: 0,
        }
    }

    // =====================================================================
    // Bodies
    // =====================================================================

    /// Always succeeds; check [`Engine::has_capacity`] first to honour the cap
    pub fn add_body(&mut self, desc: NewBody) -> Body {
        self.store.add(desc)
    }

    /// No-op when `id` is already gone
    pub fn remove_body(&mut self, id: BodyId) {
        self.store.remove(id);
    }

    pub fn remove_all_bodies(&mut self) {
        self.store.clear();
    }

    pub fn bodies(&self) -> &[Body] {
        self.store.as_slice()
    }

    pub fn body_count(&self) -> usize {
        self.store.len()
    }

    pub fn body_by_id(&self, id: BodyId) -> Option<&Body> {
        self.store.get(id)
    }

    /// No-op when `id` is already gone
    pub fn update_body(&mut self, id: BodyId, patch: BodyUpdate) {
        self.store.update(id, &patch);
    }

    /// Whether one more body fits under the soft `max_bodies` cap
    pub fn has_capacity(&self) -> bool {
        self.store.len() < self.params.max_bodies
    }

    // =====================================================================
    // Configuration
    // =====================================================================

    pub fn config(&self) -> Parameters {
        self.params
    }

    /// Merge `patch` over the active parameters and swap the result in
    pub fn update_config(&mut self, patch: &ParametersConfig) {
        self.set_config(self.params.merged(patch));
    }

    pub fn set_config(&mut self, params: Parameters) {
        self.forces = gravity_set(&params);
        self.params = params;
    }

    // =====================================================================
    // Stepping
    // =====================================================================

    /// Advance the simulation by `dt` seconds of real time
    /// Returns every merge of this frame in the order it happened
    pub fn update(&mut self, dt: f64) -> Vec<CollisionEvent> {
        // Parameters are fixed for the whole frame
        let params = self.params;
        let effective = dt * params.time_scale;
        let substeps = substep_count(effective);
        self.last_substeps = substeps;

        let mut events = Vec::new();
        if substeps == 0 {
            return events;
        }
        let h = effective / substeps as f64;
        trace!(dt, substeps, h, bodies = self.store.len(), "frame");

        for _ in 0..substeps {
            verlet_substep(&mut self.store, &self.forces, h, &mut self.scratch);

            if params.collisions_enabled {
                events.extend(resolve_collisions(&mut self.store));
            }
        }
        self.t += effective;
        events
    }

    /// Simulated time elapsed so far
    pub fn time(&self) -> f64 {
        self.t
    }

    /// Substeps performed by the most recent [`Engine::update`]
    pub fn last_substeps(&self) -> usize {
        self.last_substeps
    }

    // =====================================================================
    // Diagnostics
    // =====================================================================

    pub fn total_energy(&self) -> f64 {
        energy::total_energy(self.store.as_slice(), self.params.g, self.params.min_distance)
    }

    /// Negative total energy: the system stays gravitationally captured
    pub fn is_bound(&self) -> bool {
        self.total_energy() < 0.0
    }
}

/// Force set used by the engine: direct Newtonian gravity only
fn gravity_set(params: &Parameters) -> AccelSet {
    AccelSet::new().with(NewtonianGravity {
        g: params.g,
        min_distance: params.min_distance,
    })
}

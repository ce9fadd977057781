//! Arena-style body store
//!
//! Live bodies sit in one dense `Vec` so the force and collision passes can
//! walk a plain slice. A side index maps `BodyId -> slot`; removal is a
//! `swap_remove` plus one index fix-up for the body that moved into the hole.

use std::collections::HashMap;

use tracing::warn;

use super::states::{radius_for_mass, Body, BodyId, BodyUpdate, NewBody, MIN_MASS, MIN_RADIUS};

#[derive(Debug, Clone, Default)]
pub struct BodyStore {
    bodies: Vec<Body>,
    slots: HashMap<BodyId, usize>,
    next_id: u64,
}

impl BodyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a body and hand back a snapshot of it with its fresh id
    pub fn add(&mut self, desc: NewBody) -> Body {
        let m = clamp_positive(desc.m, MIN_MASS, "mass");
        let radius = clamp_positive(desc.radius.unwrap_or_else(|| radius_for_mass(m)), MIN_RADIUS, "radius");

        let id = BodyId(self.next_id);
        self.next_id += 1;

        let body = Body {
            id,
            m,
            radius,
            x: desc.x,
            v: desc.v,
            a: Default::default(),
            a_prev: None,
            color: desc.color,
            integrated: false,
        };

        self.slots.insert(id, self.bodies.len());
        self.bodies.push(body.clone());
        body
    }

    /// Remove `id` if it is still live. Absent ids are ignored
    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        let slot = self.slots.remove(&id)?;
        let removed = self.bodies.swap_remove(slot);

        // The former last body now lives in `slot`
        if let Some(moved) = self.bodies.get(slot) {
            self.slots.insert(moved.id, slot);
        }
        Some(removed)
    }

    /// Drop every body. Id allocation keeps counting up
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.slots.clear();
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.slots.get(&id).map(|&slot| &self.bodies[slot])
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Apply a partial edit. Position, acceleration and id are never touched
    pub fn update(&mut self, id: BodyId, patch: &BodyUpdate) -> bool {
        let Some(&slot) = self.slots.get(&id) else {
            return false;
        };
        let body = &mut self.bodies[slot];

        if let Some(m) = patch.m {
            body.m = clamp_positive(m, MIN_MASS, "mass");
        }
        if let Some(radius) = patch.radius {
            body.radius = clamp_positive(radius, MIN_RADIUS, "radius");
        }
        if let Some(v) = patch.v {
            body.v = v;
        }
        true
    }

    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

/// Keep the store's mass/radius > 0 invariant even when a caller skips validation
fn clamp_positive(value: f64, floor: f64, what: &str) -> f64 {
    if value.is_finite() && value >= floor {
        return value;
    }
    warn!(value, floor, "invalid {what} clamped");
    floor
}

//! Collision detection and merge resolution
//!
//! Overlapping spheres merge inelastically into one new body that keeps the
//! total mass, the total momentum and the total volume of the pair.
//! A body takes part in at most one merge per pass; pairs are matched
//! first-come-first-served in live-list order.

use std::collections::HashSet;

use tracing::debug;

use super::states::{Body, BodyId, NVec3, NewBody};
use super::store::BodyStore;

/// One merge that happened during a frame
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionEvent {
    pub point: NVec3, // mass-weighted centroid of the two inputs
    pub combined_mass: f64,
    pub removed: [Body; 2], // snapshots of the consumed bodies
    pub merged: Body, // the new body, with its fresh id
}

/// Result of merging two bodies, before it is inserted into a store
#[derive(Debug, Clone, PartialEq)]
pub struct Merged {
    pub m: f64,
    pub x: NVec3,
    pub v: NVec3,
    pub radius: f64,
}

/// Combine `a` and `b` conserving mass, momentum and sphere volume
pub fn merge_bodies(a: &Body, b: &Body) -> Merged {
    let m = a.m + b.m;

    // Centre of mass and momentum-conserving velocity
    let x = (a.m * a.x + b.m * b.x) / m;
    let v = (a.momentum() + b.momentum()) / m;

    // Equal total volume: r^3 = ra^3 + rb^3
    let radius = (a.radius.powi(3) + b.radius.powi(3)).cbrt();

    Merged { m, x, v, radius }
}

/// True when the spheres of `a` and `b` overlap
pub fn overlapping(a: &Body, b: &Body) -> bool {
    let reach = a.radius + b.radius;
    (a.x - b.x).norm_squared() < reach * reach
}

/// Find disjoint overlapping pairs in live-list order
/// Both members are claimed as soon as a pair matches
pub fn find_colliding_pairs(bodies: &[Body]) -> Vec<(BodyId, BodyId)> {
    let mut claimed: HashSet<BodyId> = HashSet::new();
    let mut pairs = Vec::new();

    for (i, a) in bodies.iter().enumerate() {
        if claimed.contains(&a.id) {
            continue;
        }
        for b in &bodies[i + 1..] {
            if claimed.contains(&b.id) || !overlapping(a, b) {
                continue;
            }
            claimed.insert(a.id);
            claimed.insert(b.id);
            pairs.push((a.id, b.id));
            break;
        }
    }
    pairs
}

/// Detect and merge every disjoint overlapping pair in `store`
/// Returns one event per merge, in discovery order
pub fn resolve_collisions(store: &mut BodyStore) -> Vec<CollisionEvent> {
    let pairs = find_colliding_pairs(store.as_slice());
    let mut events = Vec::with_capacity(pairs.len());

    for (id_a, id_b) in pairs {
        // Claiming guarantees both are still live
        let (Some(a), Some(b)) = (store.remove(id_a), store.remove(id_b)) else {
            continue;
        };

        let merged = merge_bodies(&a, &b);

        // Heavier body's look wins
        let color = if b.m > a.m { b.color } else { a.color };

        let new_body = store.add(NewBody {
            m: merged.m,
            x: merged.x,
            v: merged.v,
            radius: Some(merged.radius),
            color,
        });

        debug!(a = %a.id, b = %b.id, merged = %new_body.id, mass = merged.m, "bodies merged");

        events.push(CollisionEvent {
            point: merged.x,
            combined_mass: merged.m,
            removed: [a, b],
            merged: new_body,
        });
    }
    events
}

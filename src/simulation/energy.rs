//! Read-only diagnostics over a body slice
//!
//! Nothing here feeds back into the integrator.

use super::states::{Body, NVec3};

/// Sum of 1/2 m |v|^2
pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(Body::kinetic_energy).sum()
}

/// Sum over distinct pairs of -G mA mB / d
/// Pairs closer than `min_distance` are skipped rather than floored
pub fn potential_energy(bodies: &[Body], g: f64, min_distance: f64) -> f64 {
    let mut pe = 0.0;
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            let d = (b.x - a.x).norm();
            if d < min_distance {
                continue;
            }
            pe -= g * a.m * b.m / d;
        }
    }
    pe
}

pub fn total_energy(bodies: &[Body], g: f64, min_distance: f64) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies, g, min_distance)
}

pub fn total_momentum(bodies: &[Body]) -> NVec3 {
    bodies.iter().map(Body::momentum).sum()
}

/// Mass-weighted centroid, `None` for an empty slice
pub fn center_of_mass(bodies: &[Body]) -> Option<NVec3> {
    let m: f64 = bodies.iter().map(|b| b.m).sum();
    if bodies.is_empty() || m <= 0.0 {
        return None;
    }
    let weighted: NVec3 = bodies.iter().map(|b| b.m * b.x).sum();
    Some(weighted / m)
}

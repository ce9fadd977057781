//! Substepped velocity-Verlet integrator
//!
//! A frame's effective step is split into equal substeps no longer than
//! [`MAX_SUBSTEP`], so a stalled frame never turns into one huge force kick.
//! Each substep runs the classic four-stage velocity-Verlet update against
//! accelerations stored on the bodies themselves.

use super::forces::AccelSet;
use super::states::NVec3;
use super::store::BodyStore;

/// Longest allowed substep: one frame at 60 fps
pub const MAX_SUBSTEP: f64 = 1.0 / 60.0;

/// Number of equal substeps needed to cover `effective_step`
/// Zero, negative and non-finite steps need none
pub fn substep_count(effective_step: f64) -> usize {
    if !effective_step.is_finite() || effective_step <= 0.0 {
        return 0;
    }
    (effective_step / MAX_SUBSTEP).ceil().max(1.0) as usize
}

/// Advance every body in `store` by one substep of length `h`
/// `scratch` is a reusable acceleration buffer; it is resized as needed
pub fn verlet_substep(store: &mut BodyStore, forces: &AccelSet, h: f64, scratch: &mut Vec<NVec3>) {
    let n = store.len();
    if n == 0 { // no bodies, return
        return;
    }
    let half_h2 = 0.5 * h * h;

    // Snapshot a_n, then drift: x_n+1 = x_n + h v_n + (h^2/2) a_n
    // Fresh bodies have no a_n yet; their slot stays None
    for b in store.as_mut_slice() {
        b.a_prev = b.integrated.then_some(b.a);
        b.x += h * b.v + half_h2 * b.a;
    }

    // a_n+1 from x_n+1, accumulated from zero
    scratch.resize(n, NVec3::zeros());
    forces.accumulate_accels(store.as_slice(), scratch);

    // Kick: v_n+1 = v_n + (h/2) (a_n + a_n+1)
    // Without history, a_n+1 stands in for a_n
    for (b, a_new) in store.as_mut_slice().iter_mut().zip(scratch.iter()) {
        let a_old = b.a_prev.unwrap_or(*a_new);
        b.v += 0.5 * h * (a_old + a_new);
        b.a = *a_new;
        b.integrated = true;
    }
}

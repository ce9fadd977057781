use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::forces::{Acceleration, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, NewBody};
use crate::simulation::store::BodyStore;

/// Deterministic spread of `n` unit masses, no rand needed
fn spread(n: usize) -> impl Iterator<Item = NewBody> {
    (0..n).map(|i| {
        let i_f = i as f64;
        let x = NVec3::new(
            (i_f * 0.37).sin() * 50.0,
            (i_f * 0.13).cos() * 50.0,
            (i_f * 0.07).sin() * 50.0,
        );
        NewBody::new(1.0, x, NVec3::zeros()).with_radius(0.01)
    })
}

fn bench_params(n: usize) -> Parameters {
    Parameters {
        g: 0.1,
        max_bodies: n,
        ..Parameters::default()
    }
}

/// Time one direct force pass for a range of n
pub fn bench_gravity() {
    let ns = [200, 400, 800, 1600, 3200];

    for n in ns {
        let mut store = BodyStore::new();
        for b in spread(n) {
            store.add(b);
        }

        let params = bench_params(n);
        let gravity = NewtonianGravity {
            g: params.g,
            min_distance: params.min_distance,
        };
        let mut out = vec![NVec3::zeros(); n];

        // Warm up
        gravity.acceleration(store.as_slice(), &mut out);

        let t0 = Instant::now();
        gravity.acceleration(store.as_slice(), &mut out);
        let dt_direct = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct = {dt_direct:8.6} s");
    }
}

/// Time full 60 fps frames (one substep each, collisions on) for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_update() {
    let frame = 1.0 / 60.0;
    println!("N,frame_ms");

    for n in (200..=3200).step_by(200) {
        let steps = if n <= 800 { 5 } else { 1 };

        let mut engine = Engine::new(bench_params(n));
        for b in spread(n) {
            engine.add_body(b);
        }

        // Warm-up one frame
        engine.update(frame);

        let t0 = Instant::now();
        for _ in 0..steps {
            engine.update(frame);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms:.6}");
    }
}

pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, BodyId, BodyUpdate, ColorHint, NewBody, NVec3};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::{substep_count, verlet_substep, MAX_SUBSTEP};
pub use simulation::collision::{merge_bodies, resolve_collisions, CollisionEvent};
pub use simulation::engine::Engine;
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;
pub use simulation::store::BodyStore;

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};
pub use error::ScenarioError;

pub use visualization::viewer::run_3d;

pub use benchmark::benchmark::{bench_gravity, bench_update};

pub mod states;
pub mod params;
pub mod store;
pub mod forces;
pub mod integrator;
pub mod collision;
pub mod energy;
pub mod engine;
pub mod scenario;

pub mod config;
pub mod constants;
pub mod errors;
pub mod export;
pub mod integrators;
pub mod models;
pub mod physics;
pub mod scenario;

pub use config::SimulationConfig;
pub use errors::SimulationError;
pub use integrators::Integrator;
pub use models::{CelestialBody, PositionHistory, SimulationState};
pub use scenario::{Scenario, Snapshot};

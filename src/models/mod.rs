pub mod body;
pub mod history;
pub mod spacecraft;
pub mod state;

pub use body::CelestialBody;
pub use history::PositionHistory;
pub use spacecraft::{Satellite, SpacecraftProperties};
pub use state::SimulationState;

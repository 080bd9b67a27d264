pub mod euler;

pub use euler::Integrator;

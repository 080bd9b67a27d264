use crate::constants::{M_EARTH, M_MOON, R_MOON};
use nalgebra as na;

/// A fixed point-mass attractor. Immutable for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialBody {
    pub mass: f64,                  // kg
    pub position: na::Vector2<f64>, // m
}

impl CelestialBody {
    pub fn new(mass: f64, position: na::Vector2<f64>) -> Self {
        Self { mass, position }
    }

    /// Earth, centered at the origin.
    pub fn earth() -> Self {
        Self::new(M_EARTH, na::Vector2::zeros())
    }

    /// The Moon held static on the +x axis. It does not orbit.
    pub fn moon() -> Self {
        Self::new(M_MOON, na::Vector2::new(R_MOON, 0.0))
    }
}

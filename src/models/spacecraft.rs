use crate::constants::{CROSS_SECTIONAL_AREA, C_D};

/// Aerodynamic properties of the simulated vehicle. Its mass lives in
/// `SimulationState`.
pub trait SpacecraftProperties {
    fn drag_coefficient(&self) -> f64;
    fn reference_area(&self) -> f64;
}

/// Point-mass satellite with a constant drag profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Satellite {
    pub drag_coefficient: f64,     // -
    pub cross_sectional_area: f64, // m²
}

impl Satellite {
    pub fn new(drag_coefficient: f64, cross_sectional_area: f64) -> Self {
        Self {
            drag_coefficient,
            cross_sectional_area,
        }
    }
}

impl Default for Satellite {
    fn default() -> Self {
        Self::new(C_D, CROSS_SECTIONAL_AREA)
    }
}

impl SpacecraftProperties for Satellite {
    fn drag_coefficient(&self) -> f64 {
        self.drag_coefficient
    }

    fn reference_area(&self) -> f64 {
        self.cross_sectional_area
    }
}

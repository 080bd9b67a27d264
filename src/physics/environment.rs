use crate::constants::*;
use nalgebra as na;

/// Exponential atmosphere: `rho = rho0 * exp(-h / H)` above a reference sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    pub sea_level_density: f64, // kg/m³
    pub scale_height: f64,      // m
    pub reference_radius: f64,  // m
}

impl Default for Atmosphere {
    fn default() -> Self {
        Atmosphere {
            sea_level_density: ATM_DENSITY,
            scale_height: ATM_SCALE_HEIGHT,
            reference_radius: R_EARTH,
        }
    }
}

pub struct Environment {
    pub altitude: f64,
    pub density: f64,
}

impl Environment {
    pub fn new(position: &na::Vector2<f64>, atmosphere: &Atmosphere) -> Self {
        let altitude = position.magnitude() - atmosphere.reference_radius;

        // The model is undefined below the reference radius
        let density = if altitude < 0.0 {
            0.0
        } else {
            atmosphere.sea_level_density * (-altitude / atmosphere.scale_height).exp()
        };

        Environment { altitude, density }
    }

    pub fn is_below_surface(&self) -> bool {
        self.altitude < 0.0
    }
}

use super::drag::drag_force;
use super::environment::Atmosphere;
use super::gravity::attraction;
use crate::constants::G;
use crate::errors::{ensure_finite_vector, ensure_non_negative, ensure_positive, Result};
use crate::models::{CelestialBody, Satellite, SimulationState};
use nalgebra as na;

/// Source of the net force acting on the satellite for a given state.
pub trait EquationsOfMotion {
    fn forces(&self, state: &SimulationState) -> ForceBreakdown;

    /// Rejects parameters that would make `forces` non-finite.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Individual contributions to the net force (N), kept separate for reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceBreakdown {
    pub earth: na::Vector2<f64>,
    pub moon: na::Vector2<f64>,
    pub drag: na::Vector2<f64>,
    pub engine: na::Vector2<f64>,
}

impl ForceBreakdown {
    pub fn zero() -> Self {
        ForceBreakdown {
            earth: na::Vector2::zeros(),
            moon: na::Vector2::zeros(),
            drag: na::Vector2::zeros(),
            engine: na::Vector2::zeros(),
        }
    }

    pub fn total(&self) -> na::Vector2<f64> {
        self.earth + self.moon + self.drag + self.engine
    }
}

/// Earth and a static Moon as attractors, exponential-atmosphere drag and the
/// commanded engine thrust.
#[derive(Debug, Clone, PartialEq)]
pub struct SatelliteDynamics {
    pub gravitational_constant: f64,
    pub earth: CelestialBody,
    pub moon: CelestialBody,
    pub atmosphere: Atmosphere,
    pub satellite: Satellite,
}

impl SatelliteDynamics {
    pub fn new(
        gravitational_constant: f64,
        earth: CelestialBody,
        moon: CelestialBody,
        atmosphere: Atmosphere,
        satellite: Satellite,
    ) -> Self {
        Self {
            gravitational_constant,
            earth,
            moon,
            atmosphere,
            satellite,
        }
    }
}

impl Default for SatelliteDynamics {
    fn default() -> Self {
        Self::new(
            G,
            CelestialBody::earth(),
            CelestialBody::moon(),
            Atmosphere::default(),
            Satellite::default(),
        )
    }
}

impl EquationsOfMotion for SatelliteDynamics {
    fn forces(&self, state: &SimulationState) -> ForceBreakdown {
        let g = self.gravitational_constant;
        let m = state.satellite_mass;

        ForceBreakdown {
            earth: attraction(g, m, self.earth.mass, &state.position, &self.earth.position),
            moon: attraction(g, m, self.moon.mass, &state.position, &self.moon.position),
            drag: drag_force(&self.satellite, &self.atmosphere, &state.position, &state.velocity),
            engine: state.engine_force(),
        }
    }

    fn validate(&self) -> Result<()> {
        ensure_non_negative("gravitational constant", self.gravitational_constant)?;
        ensure_non_negative("earth mass", self.earth.mass)?;
        ensure_finite_vector("earth position", [self.earth.position.x, self.earth.position.y])?;
        ensure_non_negative("moon mass", self.moon.mass)?;
        ensure_finite_vector("moon position", [self.moon.position.x, self.moon.position.y])?;

        ensure_non_negative("sea-level density", self.atmosphere.sea_level_density)?;
        ensure_positive("scale height", self.atmosphere.scale_height)?;
        ensure_non_negative("reference radius", self.atmosphere.reference_radius)?;

        ensure_non_negative("drag coefficient", self.satellite.drag_coefficient)?;
        ensure_non_negative("cross-sectional area", self.satellite.cross_sectional_area)?;
        Ok(())
    }
}

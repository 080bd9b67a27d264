//! Run configuration, loadable from TOML.
//!
//! Every field defaults to the reference Earth/Moon/LEO setup, so an empty
//! file (or `SimulationConfig::default()`) describes a 500 kg satellite at
//! 7000 km moving at 7.5 km/s with the engine off.
//!
//! ```toml
//! [satellite]
//! mass = 500.0
//! position = [7000e3, 0.0]
//! velocity = [0.0, 7500.0]
//!
//! [integration]
//! dt = 1.0
//! steps = 1000
//!
//! [[commands]]
//! step = 100
//! power = 5.0
//! direction = [0.0, 1.0]
//! ```

use crate::constants::*;
use crate::errors::{
    ensure_direction, ensure_finite, ensure_finite_vector, ensure_positive, Result,
};
use crate::models::{CelestialBody, Satellite};
use crate::physics::dynamics::{EquationsOfMotion, SatelliteDynamics};
use crate::physics::environment::Atmosphere;
use nalgebra as na;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub satellite: SatelliteConfig,
    pub engine: EngineConfig,
    pub integration: IntegrationConfig,
    pub commands: Vec<EngineCommand>,
}

/// Physical constants and the fixed attractors.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PhysicsConfig {
    pub gravitational_constant: f64,
    pub earth_mass: f64,
    pub earth_radius: f64,
    pub moon_mass: f64,
    pub moon_position: [f64; 2], // static, see `CelestialBody::moon`
    pub sea_level_density: f64,
    pub scale_height: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: G,
            earth_mass: M_EARTH,
            earth_radius: R_EARTH,
            moon_mass: M_MOON,
            moon_position: [R_MOON, 0.0],
            sea_level_density: ATM_DENSITY,
            scale_height: ATM_SCALE_HEIGHT,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SatelliteConfig {
    pub mass: f64,
    pub drag_coefficient: f64,
    pub cross_sectional_area: f64,
    pub position: [f64; 2],
    pub velocity: [f64; 2],
}

impl Default for SatelliteConfig {
    fn default() -> Self {
        Self {
            mass: SATELLITE_MASS,
            drag_coefficient: C_D,
            cross_sectional_area: CROSS_SECTIONAL_AREA,
            position: [7000e3, 0.0],
            velocity: [0.0, 7.5e3],
        }
    }
}

/// Engine command in effect at step 0.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub power: f64,
    pub direction: [f64; 2],
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            power: 0.0,
            direction: [1.0, 0.0],
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct IntegrationConfig {
    pub dt: f64,                 // s
    pub steps: usize,            // run length for the driver
    pub history_capacity: usize, // 0 = unbounded
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            dt: 1.0,
            steps: 1000,
            history_capacity: 0,
        }
    }
}

/// Engine command applied just before the step with index `step` runs.
/// Omitted fields leave the current setting unchanged.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EngineCommand {
    pub step: usize,
    #[serde(default)]
    pub power: Option<f64>,
    #[serde(default)]
    pub direction: Option<[f64; 2]>,
}

impl SimulationConfig {
    /// Reads, parses and validates a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Physical constants are checked by `SatelliteDynamics::validate`; this
    /// adds the initial state, engine command, step size and command script.
    pub fn validate(&self) -> Result<()> {
        let s = &self.satellite;

        self.dynamics().validate()?;

        ensure_positive("satellite.mass", s.mass)?;
        ensure_finite_vector("satellite.position", s.position)?;
        ensure_finite_vector("satellite.velocity", s.velocity)?;

        ensure_finite("engine.power", self.engine.power)?;
        ensure_direction("engine.direction", self.engine.direction)?;

        ensure_positive("integration.dt", self.integration.dt)?;

        for (n, command) in self.commands.iter().enumerate() {
            if let Some(power) = command.power {
                ensure_finite(&format!("commands[{n}].power"), power)?;
            }
            if let Some(d) = command.direction {
                ensure_direction(&format!("commands[{n}].direction"), d)?;
            }
        }
        Ok(())
    }

    pub fn dynamics(&self) -> SatelliteDynamics {
        let p = &self.physics;
        SatelliteDynamics::new(
            p.gravitational_constant,
            CelestialBody::new(p.earth_mass, na::Vector2::zeros()),
            CelestialBody::new(p.moon_mass, to_vector(p.moon_position)),
            Atmosphere {
                sea_level_density: p.sea_level_density,
                scale_height: p.scale_height,
                reference_radius: p.earth_radius,
            },
            Satellite::new(
                self.satellite.drag_coefficient,
                self.satellite.cross_sectional_area,
            ),
        )
    }
}

pub fn to_vector(v: [f64; 2]) -> na::Vector2<f64> {
    na::Vector2::new(v[0], v[1])
}

use crate::errors::{Result, SimulationError};
use nalgebra as na;

/// Mutable state of the satellite. Position is Earth-centered.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub position: na::Vector2<f64>, // m
    pub velocity: na::Vector2<f64>, // m/s
    pub satellite_mass: f64,        // kg

    // Engine command
    pub engine_power: f64, // N, negative for retro-thrust
    engine_direction: na::Vector2<f64>,
}

impl SimulationState {
    pub fn new(
        position: na::Vector2<f64>,
        velocity: na::Vector2<f64>,
        satellite_mass: f64,
        engine_power: f64,
        engine_direction: na::Vector2<f64>,
    ) -> Result<Self> {
        Ok(SimulationState {
            position,
            velocity,
            satellite_mass,
            engine_power,
            engine_direction: unit_direction(&engine_direction)?,
        })
    }

    /// Unit vector along which the engine pushes.
    pub fn engine_direction(&self) -> na::Vector2<f64> {
        self.engine_direction
    }

    /// Normalizes and stores a new thrust direction. On error the previous
    /// direction is kept.
    pub fn set_engine_direction(&mut self, direction: na::Vector2<f64>) -> Result<()> {
        self.engine_direction = unit_direction(&direction)?;
        Ok(())
    }

    pub fn engine_force(&self) -> na::Vector2<f64> {
        self.engine_direction * self.engine_power
    }

    pub fn altitude(&self, reference_radius: f64) -> f64 {
        self.position.magnitude() - reference_radius
    }
}

pub(crate) fn unit_direction(direction: &na::Vector2<f64>) -> Result<na::Vector2<f64>> {
    if !direction.iter().all(|c| c.is_finite()) {
        return Err(SimulationError::InvalidArgument(format!(
            "engine direction must be finite, got ({}, {})",
            direction.x, direction.y
        )));
    }
    direction.try_normalize(0.0).ok_or_else(|| {
        SimulationError::InvalidArgument("engine direction must be non-zero".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    fn state() -> SimulationState {
        SimulationState::new(
            na::Vector2::new(7000e3, 0.0),
            na::Vector2::new(0.0, 7500.0),
            500.0,
            0.0,
            na::Vector2::new(1.0, 0.0),
        )
        .unwrap()
    }

    #[test_case(na::Vector2::new(3.0, 4.0); "pythagorean")]
    #[test_case(na::Vector2::new(-2.5, 0.0); "negative axis")]
    #[test_case(na::Vector2::new(1e-12, -1e-12); "tiny")]
    #[test_case(na::Vector2::new(1e12, 3e11); "huge")]
    fn direction_is_normalized(direction: na::Vector2<f64>) {
        let mut state = state();
        state.set_engine_direction(direction).unwrap();
        assert_abs_diff_eq!(state.engine_direction().magnitude(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            state.engine_direction(),
            direction / direction.magnitude(),
            epsilon = 1e-12
        );
    }

    #[test_case(na::Vector2::zeros(); "zero")]
    #[test_case(na::Vector2::new(f64::NAN, 1.0); "nan")]
    #[test_case(na::Vector2::new(f64::INFINITY, 0.0); "infinite")]
    fn invalid_direction_is_rejected(direction: na::Vector2<f64>) {
        let mut state = state();
        state.set_engine_direction(na::Vector2::new(0.0, 2.0)).unwrap();
        let result = state.set_engine_direction(direction);
        assert!(matches!(result, Err(SimulationError::InvalidArgument(_))));
        assert_eq!(state.engine_direction(), na::Vector2::new(0.0, 1.0));
    }

    #[test]
    fn construction_normalizes_direction() {
        let state = SimulationState::new(
            na::Vector2::zeros(),
            na::Vector2::zeros(),
            1.0,
            10.0,
            na::Vector2::new(0.0, -5.0),
        )
        .unwrap();
        assert_eq!(state.engine_direction(), na::Vector2::new(0.0, -1.0));
        assert_eq!(state.engine_force(), na::Vector2::new(0.0, -10.0));
    }

    #[test]
    fn altitude_above_reference() {
        assert_abs_diff_eq!(state().altitude(6371e3), 629e3, epsilon = 1e-6);
    }
}

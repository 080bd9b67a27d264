use crate::constants::{G, M_EARTH};
use crate::models::state::SimulationState;

/// Earth's standard gravitational parameter (m³/s²).
pub const MU_EARTH: f64 = G * M_EARTH;

/// Kinetic plus Earth-gravitational potential energy (J). The Moon and drag
/// are ignored.
pub fn mechanical_energy(state: &SimulationState, mu: f64) -> f64 {
    let r = state.position.magnitude();
    let v = state.velocity.magnitude();

    let kinetic = 0.5 * state.satellite_mass * v * v;
    let potential = -mu * state.satellite_mass / r;

    kinetic + potential
}

/// z component of r × (m v) about Earth's center (kg·m²/s).
pub fn angular_momentum(state: &SimulationState) -> f64 {
    let p = state.velocity * state.satellite_mass;
    state.position.x * p.y - state.position.y * p.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::R_EARTH;
    use approx::assert_abs_diff_eq;
    use nalgebra as na;
    use test_case::test_case;

    fn state(position: na::Vector2<f64>, velocity: na::Vector2<f64>, mass: f64) -> SimulationState {
        SimulationState::new(position, velocity, mass, 0.0, na::Vector2::new(1.0, 0.0)).unwrap()
    }

    #[test_case(
        state(na::Vector2::new(R_EARTH, 0.0), na::Vector2::zeros(), 100.0),
        -6256305069.84;
        "energy at Earth's surface"
    )]
    #[test_case(
        state(na::Vector2::new(1e12, 0.0), na::Vector2::new(0.0, 10.0), 2.0),
        100.0 - 2.0 * MU_EARTH / 1e12;
        "far away and moving"
    )]
    fn test_energy(state: SimulationState, expected_energy: f64) {
        assert_abs_diff_eq!(mechanical_energy(&state, MU_EARTH), expected_energy, epsilon = 1e-2);
    }

    #[test_case(
        state(na::Vector2::zeros(), na::Vector2::zeros(), 1.0),
        0.0;
        "zero angular momentum"
    )]
    #[test_case(
        state(na::Vector2::new(R_EARTH + 100e3, 0.0), na::Vector2::new(0.0, 7.848e3), 100.0),
        5.0784408e12;
        "100 km orbit angular momentum"
    )]
    #[test_case(
        state(na::Vector2::new(R_EARTH + 100e3, 0.0), na::Vector2::new(0.0, -7.848e3), 100.0),
        -5.0784408e12;
        "retrograde orbit"
    )]
    fn test_angular_momentum(state: SimulationState, expected: f64) {
        assert_abs_diff_eq!(angular_momentum(&state), expected, epsilon = 1e6);
    }
}

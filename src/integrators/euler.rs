use crate::config::{to_vector, SimulationConfig};
use crate::errors::{Result, SimulationError};
use crate::models::{PositionHistory, SimulationState};
use crate::physics::dynamics::{EquationsOfMotion, ForceBreakdown, SatelliteDynamics};
use log::{debug, trace, warn};
use nalgebra as na;

/// Fixed-step semi-implicit Euler integrator that owns the simulation state.
///
/// Each [`step`](Integrator::step) updates velocity from the current forces
/// and then moves the satellite with the *updated* velocity. The update order
/// determines the energy behavior and must not be swapped.
#[derive(Debug, Clone)]
pub struct Integrator<T: EquationsOfMotion = SatelliteDynamics> {
    eom: T,
    state: SimulationState,
    dt: f64,
    history: PositionHistory,
    step_count: u64,
    last_forces: ForceBreakdown,
}

impl Integrator<SatelliteDynamics> {
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        let state = SimulationState::new(
            to_vector(config.satellite.position),
            to_vector(config.satellite.velocity),
            config.satellite.mass,
            config.engine.power,
            to_vector(config.engine.direction),
        )
        .map_err(|e| SimulationError::InvalidConfiguration(e.to_string()))?;
        let history = PositionHistory::with_capacity(config.integration.history_capacity);

        Self::with_history(config.dynamics(), state, config.integration.dt, history)
    }
}

impl<T: EquationsOfMotion> Integrator<T> {
    pub fn new(eom: T, state: SimulationState, dt: f64) -> Result<Self> {
        Self::with_history(eom, state, dt, PositionHistory::unbounded())
    }

    /// The initial position is recorded as the first history entry.
    pub fn with_history(
        eom: T,
        state: SimulationState,
        dt: f64,
        mut history: PositionHistory,
    ) -> Result<Self> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimulationError::InvalidConfiguration(format!(
                "time step must be positive and finite, got {dt}"
            )));
        }
        if !(state.satellite_mass.is_finite() && state.satellite_mass > 0.0) {
            return Err(SimulationError::InvalidConfiguration(format!(
                "satellite mass must be positive and finite, got {}",
                state.satellite_mass
            )));
        }
        let finite = |v: &na::Vector2<f64>| v.iter().all(|c| c.is_finite());
        if !finite(&state.position) || !finite(&state.velocity) {
            return Err(SimulationError::InvalidConfiguration(
                "initial position and velocity must be finite".to_string(),
            ));
        }
        eom.validate()?;

        debug!(
            "Integrator ready: dt={}s, mass={}kg, r0=({}, {}) m, v0=({}, {}) m/s",
            dt,
            state.satellite_mass,
            state.position.x,
            state.position.y,
            state.velocity.x,
            state.velocity.y
        );
        history.push(state.position);

        Ok(Integrator {
            eom,
            state,
            dt,
            history,
            step_count: 0,
            last_forces: ForceBreakdown::zero(),
        })
    }

    /// Advances the state by one fixed time step.
    pub fn step(&mut self) {
        let forces = self.eom.forces(&self.state);
        let acceleration = forces.total() / self.state.satellite_mass;

        self.state.velocity += acceleration * self.dt;
        self.state.position += self.state.velocity * self.dt;
        self.history.push(self.state.position);

        self.step_count += 1;
        self.last_forces = forces;
        trace!(
            "step {}: r=({:.3}, {:.3}) m, v=({:.6}, {:.6}) m/s",
            self.step_count,
            self.state.position.x,
            self.state.position.y,
            self.state.velocity.x,
            self.state.velocity.y
        );
    }

    pub fn set_engine_power(&mut self, power: f64) {
        debug!("Engine power set to {} N", power);
        self.state.engine_power = power;
    }

    /// Fails with `InvalidArgument` for a zero or non-finite direction and
    /// keeps the previous one.
    pub fn set_engine_direction(&mut self, direction: na::Vector2<f64>) -> Result<()> {
        if let Err(e) = self.state.set_engine_direction(direction) {
            warn!("Engine direction command rejected: {}", e);
            return Err(e);
        }
        debug!(
            "Engine direction set to ({}, {})",
            self.state.engine_direction().x,
            self.state.engine_direction().y
        );
        Ok(())
    }

    pub fn position(&self) -> na::Vector2<f64> {
        self.state.position
    }

    pub fn velocity(&self) -> na::Vector2<f64> {
        self.state.velocity
    }

    pub fn engine_power(&self) -> f64 {
        self.state.engine_power
    }

    pub fn engine_direction(&self) -> na::Vector2<f64> {
        self.state.engine_direction()
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn history(&self) -> &PositionHistory {
        &self.history
    }

    pub fn dynamics(&self) -> &T {
        &self.eom
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Simulated time since construction (s).
    pub fn elapsed(&self) -> f64 {
        self.step_count as f64 * self.dt
    }

    /// Force contributions used by the most recent step; zero before the first.
    pub fn last_forces(&self) -> &ForceBreakdown {
        &self.last_forces
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    struct NoForces;

    impl EquationsOfMotion for NoForces {
        fn forces(&self, _state: &SimulationState) -> ForceBreakdown {
            ForceBreakdown::zero()
        }
    }

    /// Constant push along +x, independent of state.
    struct ConstantForce(f64);

    impl EquationsOfMotion for ConstantForce {
        fn forces(&self, state: &SimulationState) -> ForceBreakdown {
            ForceBreakdown {
                earth: na::Vector2::new(self.0, 0.0),
                engine: state.engine_force(),
                ..ForceBreakdown::zero()
            }
        }
    }

    fn state(velocity: na::Vector2<f64>) -> SimulationState {
        SimulationState::new(
            na::Vector2::new(1000.0, -50.0),
            velocity,
            2.0,
            0.0,
            na::Vector2::new(1.0, 0.0),
        )
        .unwrap()
    }

    #[test_case(0.0; "zero step")]
    #[test_case(-1.0; "negative step")]
    #[test_case(f64::NAN; "nan step")]
    #[test_case(f64::INFINITY; "infinite step")]
    fn rejects_bad_time_step(dt: f64) {
        let result = Integrator::new(NoForces, state(na::Vector2::zeros()), dt);
        assert!(matches!(result, Err(SimulationError::InvalidConfiguration(_))));
    }

    #[test_case(0.0; "zero mass")]
    #[test_case(-10.0; "negative mass")]
    fn rejects_bad_mass(mass: f64) {
        let mut s = state(na::Vector2::zeros());
        s.satellite_mass = mass;
        let result = Integrator::new(NoForces, s, 1.0);
        assert!(matches!(result, Err(SimulationError::InvalidConfiguration(_))));
    }

    #[test]
    fn history_starts_with_initial_position() {
        let integrator = Integrator::new(NoForces, state(na::Vector2::zeros()), 1.0).unwrap();
        assert_eq!(integrator.history().len(), 1);
        assert_eq!(integrator.history().last(), Some(&na::Vector2::new(1000.0, -50.0)));
        assert_eq!(integrator.step_count(), 0);
    }

    #[test_case(na::Vector2::new(3.0, -4.0), 1.0; "unit step")]
    #[test_case(na::Vector2::new(7500.0, 12.5), 0.25; "quarter step")]
    fn force_free_step_is_pure_drift(velocity: na::Vector2<f64>, dt: f64) {
        let mut integrator = Integrator::new(NoForces, state(velocity), dt).unwrap();
        let before = integrator.position();
        integrator.step();

        assert_eq!(integrator.velocity(), velocity);
        assert_eq!(integrator.position(), before + velocity * dt);
        assert_eq!(integrator.history().len(), 2);
        assert_eq!(integrator.history().last(), Some(&integrator.position()));
    }

    #[test]
    fn position_uses_updated_velocity() {
        // a = 4 m/s², dt = 0.5 s: v1 = 2, x1 = x0 + v1*dt = x0 + 1
        let mut integrator =
            Integrator::new(ConstantForce(8.0), state(na::Vector2::zeros()), 0.5).unwrap();
        integrator.step();
        assert_eq!(integrator.velocity(), na::Vector2::new(2.0, 0.0));
        assert_eq!(integrator.position(), na::Vector2::new(1001.0, -50.0));
    }

    #[test]
    fn engine_commands_take_effect_on_next_step() {
        let mut integrator =
            Integrator::new(ConstantForce(0.0), state(na::Vector2::zeros()), 1.0).unwrap();
        integrator.set_engine_power(6.0);
        integrator.set_engine_direction(na::Vector2::new(0.0, 3.0)).unwrap();
        assert_eq!(integrator.engine_power(), 6.0);
        assert_eq!(integrator.engine_direction(), na::Vector2::new(0.0, 1.0));

        integrator.step();
        assert_eq!(integrator.velocity(), na::Vector2::new(0.0, 3.0));
        assert_eq!(integrator.last_forces().engine, na::Vector2::new(0.0, 6.0));
    }

    #[test]
    fn negative_power_is_retro_thrust() {
        let mut integrator =
            Integrator::new(ConstantForce(0.0), state(na::Vector2::zeros()), 1.0).unwrap();
        integrator.set_engine_power(-2.0);
        integrator.step();
        assert_eq!(integrator.velocity(), na::Vector2::new(-1.0, 0.0));
    }

    #[test]
    fn zero_direction_is_rejected_and_state_kept() {
        let mut integrator =
            Integrator::new(NoForces, state(na::Vector2::zeros()), 1.0).unwrap();
        integrator.set_engine_direction(na::Vector2::new(-1.0, 1.0)).unwrap();
        let before = integrator.engine_direction();

        let result = integrator.set_engine_direction(na::Vector2::zeros());
        assert!(matches!(result, Err(SimulationError::InvalidArgument(_))));
        assert_eq!(integrator.engine_direction(), before);
        assert_relative_eq!(before.magnitude(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn elapsed_time_tracks_steps() {
        let mut integrator =
            Integrator::new(NoForces, state(na::Vector2::zeros()), 0.5).unwrap();
        for _ in 0..10 {
            integrator.step();
        }
        assert_eq!(integrator.step_count(), 10);
        assert_eq!(integrator.elapsed(), 5.0);
        assert_eq!(integrator.history().len(), 11);
    }

    #[test]
    fn capped_history_keeps_latest_positions() {
        let mut integrator = Integrator::with_history(
            NoForces,
            state(na::Vector2::new(1.0, 0.0)),
            1.0,
            PositionHistory::with_capacity(4),
        )
        .unwrap();
        for _ in 0..10 {
            integrator.step();
        }
        assert_eq!(integrator.history().len(), 4);
        assert_eq!(integrator.history().last(), Some(&na::Vector2::new(1010.0, -50.0)));
        assert_eq!(integrator.history().get(0), Some(&na::Vector2::new(1007.0, -50.0)));
    }

    #[test]
    fn from_config_applies_initial_conditions() {
        let mut config = SimulationConfig::default();
        config.engine.power = 3.0;
        config.engine.direction = [0.0, -2.0];
        config.integration.dt = 0.1;
        let integrator = Integrator::from_config(&config).unwrap();

        assert_eq!(integrator.position(), na::Vector2::new(7000e3, 0.0));
        assert_eq!(integrator.velocity(), na::Vector2::new(0.0, 7500.0));
        assert_eq!(integrator.engine_power(), 3.0);
        assert_eq!(integrator.engine_direction(), na::Vector2::new(0.0, -1.0));
        assert_eq!(integrator.dt(), 0.1);
    }

    #[test]
    fn from_config_rejects_invalid() {
        let mut config = SimulationConfig::default();
        config.satellite.mass = 0.0;
        assert!(matches!(
            Integrator::from_config(&config),
            Err(SimulationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn rejects_negative_attractor_mass() {
        let mut dynamics = SatelliteDynamics::default();
        dynamics.earth.mass = -dynamics.earth.mass;
        let result = Integrator::new(dynamics, state(na::Vector2::zeros()), 1.0);
        assert!(matches!(result, Err(SimulationError::InvalidConfiguration(_))));
    }

    #[test]
    fn rejects_degenerate_atmosphere() {
        let mut dynamics = SatelliteDynamics::default();
        dynamics.atmosphere.scale_height = 0.0;
        let at_surface = SimulationState::new(
            na::Vector2::new(dynamics.atmosphere.reference_radius, 0.0),
            na::Vector2::new(0.0, 7500.0),
            500.0,
            0.0,
            na::Vector2::new(1.0, 0.0),
        )
        .unwrap();
        let result = Integrator::new(dynamics, at_surface, 1.0);
        assert!(matches!(result, Err(SimulationError::InvalidConfiguration(_))));
    }
}

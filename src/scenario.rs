//! Scripted runs: an integrator plus a list of engine commands keyed by step.

use crate::config::{to_vector, EngineCommand, SimulationConfig};
use crate::errors::Result;
use crate::integrators::Integrator;
use crate::physics::energy::{angular_momentum, mechanical_energy};
use log::{debug, info, warn};
use nalgebra as na;

/// State of the run after `step` completed steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub step: u64,
    pub time: f64,                  // s
    pub position: na::Vector2<f64>, // m
    pub velocity: na::Vector2<f64>, // m/s
    pub altitude: f64,              // m
    pub energy: f64,                // J, Earth-only
    pub angular_momentum: f64,      // kg·m²/s
    pub engine_power: f64,          // N
    pub engine_direction: na::Vector2<f64>,
}

pub struct Scenario {
    integrator: Integrator,
    commands: Vec<EngineCommand>,
    next_command: usize,
    steps: usize,
}

impl Scenario {
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        let integrator = Integrator::from_config(config)?;

        let mut commands = config.commands.clone();
        commands.sort_by_key(|c| c.step);
        for command in commands.iter().filter(|c| c.step >= config.integration.steps) {
            warn!(
                "Engine command at step {} is beyond the run length of {} steps and will not fire",
                command.step, config.integration.steps
            );
        }

        debug!(
            "Scenario: {} steps, {} engine commands",
            config.integration.steps,
            commands.len()
        );
        Ok(Scenario {
            integrator,
            commands,
            next_command: 0,
            steps: config.integration.steps,
        })
    }

    /// Applies the commands due at the current step, then steps once.
    pub fn advance(&mut self) -> Result<Snapshot> {
        self.apply_due_commands()?;
        self.integrator.step();
        Ok(self.snapshot())
    }

    /// Runs the configured number of steps, handing every snapshot (initial
    /// state included) to `observer`.
    pub fn run<F: FnMut(&Snapshot) -> Result<()>>(&mut self, mut observer: F) -> Result<()> {
        observer(&self.snapshot())?;
        while (self.integrator.step_count() as usize) < self.steps {
            let snapshot = self.advance()?;
            observer(&snapshot)?;
        }
        info!(
            "Completed {} steps ({} s simulated)",
            self.integrator.step_count(),
            self.integrator.elapsed()
        );
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        let integrator = &self.integrator;
        let dynamics = integrator.dynamics();
        let state = integrator.state();
        let mu = dynamics.gravitational_constant * dynamics.earth.mass;

        Snapshot {
            step: integrator.step_count(),
            time: integrator.elapsed(),
            position: state.position,
            velocity: state.velocity,
            altitude: state.altitude(dynamics.atmosphere.reference_radius),
            energy: mechanical_energy(state, mu),
            angular_momentum: angular_momentum(state),
            engine_power: state.engine_power,
            engine_direction: state.engine_direction(),
        }
    }

    pub fn integrator(&self) -> &Integrator {
        &self.integrator
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    fn apply_due_commands(&mut self) -> Result<()> {
        let current = self.integrator.step_count() as usize;
        while let Some(command) = self.commands.get(self.next_command) {
            if command.step > current {
                break;
            }
            if let Some(power) = command.power {
                self.integrator.set_engine_power(power);
            }
            if let Some(direction) = command.direction {
                self.integrator.set_engine_direction(to_vector(direction))?;
            }
            self.next_command += 1;
        }
        Ok(())
    }
}

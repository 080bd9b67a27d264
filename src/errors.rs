use thiserror::Error;

/// Errors raised while configuring, commanding or exporting a simulation.
///
/// Numeric degeneracies inside the force model (coincident bodies, zero
/// velocity) never surface here; they resolve to a zero force.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SimulationError>;

fn invalid(field: &str, requirement: &str, value: impl std::fmt::Debug) -> SimulationError {
    SimulationError::InvalidConfiguration(format!("{field} must be {requirement}, got {value:?}"))
}

pub(crate) fn ensure_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, "finite", value))
    }
}

pub(crate) fn ensure_positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "positive and finite", value))
    }
}

pub(crate) fn ensure_non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "non-negative and finite", value))
    }
}

pub(crate) fn ensure_finite_vector(field: &str, value: [f64; 2]) -> Result<()> {
    if value.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(invalid(field, "finite", value))
    }
}

pub(crate) fn ensure_direction(field: &str, value: [f64; 2]) -> Result<()> {
    ensure_finite_vector(field, value)?;
    if value == [0.0, 0.0] {
        Err(invalid(field, "non-zero", value))
    } else {
        Ok(())
    }
}

// src/error.rs

//! Error types for the inventory simulator.
//!
//! Bad configuration is rejected before the simulation core runs. Once the
//! parameters are valid the day loop itself cannot fail, so the remaining
//! variants only come from the I/O surface (config files and CSV export).

use thiserror::Error;

/// Result alias used across the crate.
pub type SimResult<T> = Result<T, SimulationError>;

#[derive(Debug, Error)]
pub enum SimulationError {
    /// A parameter is outside of its domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The demand distribution could not be built from the configured mean.
    #[error("demand distribution error: {0}")]
    Distribution(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl SimulationError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter, if this is a validation failure.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { name, .. } => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_message_names_the_field() {
        let err = SimulationError::invalid("alpha", "must be within [0, 1], got 1.5");
        assert_eq!(
            err.to_string(),
            "invalid parameter `alpha`: must be within [0, 1], got 1.5"
        );
        assert_eq!(err.parameter(), Some("alpha"));
    }

    #[test]
    fn io_errors_have_no_parameter() {
        let err: SimulationError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.parameter().is_none());
    }
}

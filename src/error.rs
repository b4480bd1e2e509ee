//! Crate error type
//!
//! The stepper itself never fails; errors only come from bad inputs at the
//! edges (masses, budgets, settings files).

use std::fmt;

/// Errors raised at the simulation boundary
#[derive(Debug)]
pub enum Error {
    /// Mass must be positive and finite
    InvalidMass { mass: f64 },
    /// Time budget must be non-negative and finite
    InvalidBudget { budget: f64 },
    /// Settings failed validation
    InvalidSettings(String),
    Io(std::io::Error),
    Json(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidMass { mass } => write!(f, "invalid mass {mass}: must be positive and finite"),
            Error::InvalidBudget { budget } => {
                write!(f, "invalid time budget {budget}: must be non-negative and finite")
            }
            Error::InvalidSettings(msg) => write!(f, "invalid settings: {msg}"),
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::Json(err) => write!(f, "json error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

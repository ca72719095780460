//! Error kinds surfaced by the simulation library
//!
//! Close encounters are not an error: the force model softens and cuts off
//! small separations itself, so nothing here describes a degenerate pair.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum SimError {
    /// Body mass was zero, negative or not a finite number
    InvalidMass { mass: f64 },
    /// Initial position or velocity has a NaN or infinite component
    NonFiniteInitialState,
    /// A numerical parameter is outside its allowed range
    InvalidParameter { name: &'static str, value: f64 },
    /// A scenario body entry has the wrong vector shape
    MalformedBodyConfig { body: usize, reason: String },
    /// A persisted parameter line could not be parsed
    MalformedParameterRecord { reason: String },
    /// Requested record index (1-based) does not exist in the file
    MissingRecord { index: usize, available: usize },
    /// Integration produced NaN or infinity; the run cannot continue
    NonFiniteState { body: usize, t: f64 },
    Io(io::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidMass { mass } => {
                write!(f, "invalid mass {mass}: mass must be strictly positive")
            }
            SimError::NonFiniteInitialState => {
                write!(f, "initial position and velocity must be finite")
            }
            SimError::InvalidParameter { name, value } => {
                write!(f, "invalid parameter `{name}` = {value}")
            }
            SimError::MalformedBodyConfig { body, reason } => {
                write!(f, "body {body} is malformed: {reason}")
            }
            SimError::MalformedParameterRecord { reason } => {
                write!(f, "malformed parameter record: {reason}")
            }
            SimError::MissingRecord { index, available } => {
                write!(f, "record {index} not found ({available} record(s) available)")
            }
            SimError::NonFiniteState { body, t } => {
                write!(f, "body {body} reached a non-finite state at t = {t}")
            }
            SimError::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SimError {
    fn from(err: io::Error) -> Self {
        SimError::Io(err)
    }
}

//! Simulation error taxonomy.
//!
//! Generation operations are infallible given well-formed numeric input, so
//! the taxonomy reduces to lookup failure on manual verification.

use thiserror::Error;

/// Errors surfaced by simulation operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// No alert with the requested identifier exists.
    #[error("alert {0} not found")]
    AlertNotFound(String),
}

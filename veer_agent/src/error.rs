// veer_agent/src/error.rs

use thiserror::Error;
use veer_core::error::UnknownControllerError;

/// Configuration and dispatch errors for the actuation layer.
///
/// All of these surface synchronously, either at `ActuationSpec`
/// construction or at registry lookup, so a misconfigured agent is rejected
/// before any simulation step runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActuationError {
    #[error("'{name}' is not a known robot (expected one of: {})", .known.join(", "))]
    InvalidRobot { name: String, known: Vec<String> },

    #[error(transparent)]
    InvalidController(#[from] UnknownControllerError),

    #[error("noise_multiplier must be finite and >= 0, got {value}")]
    InvalidMultiplier { value: f64 },

    #[error("'{0}' is not a registered move")]
    UnknownMove(String),
}

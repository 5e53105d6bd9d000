// veer_agent/src/spec.rs

use crate::error::ActuationError;
use serde::{Deserialize, Serialize};
use veer_core::catalog::pyrobot_noise_models;
use veer_core::model::Controller;

/// Parameter bundle for one commanded motion under actuation noise.
///
/// Validation happens at construction (and therefore also at
/// deserialization), never during action execution: a spec that exists is a
/// spec that can be dispatched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawActuationSpec")]
pub struct ActuationSpec {
    /// Nominal scalar magnitude of the commanded motion. Meters for
    /// translations, radians for rotations.
    amount: f64,
    /// Which robot's fitted noise to use. Must be a catalog key.
    robot: String,
    controller: Controller,
    /// Scales the sampled noise; `0.0` disables noise without changing the
    /// nominal motion, which is useful for ablations.
    noise_multiplier: f64,
}

impl ActuationSpec {
    /// Builds and validates a spec.
    pub fn new(
        amount: f64,
        robot: &str,
        controller: &str,
        noise_multiplier: f64,
    ) -> Result<Self, ActuationError> {
        let catalog = pyrobot_noise_models();
        if !catalog.contains(robot) {
            return Err(ActuationError::InvalidRobot {
                name: robot.to_owned(),
                known: catalog.robots().map(str::to_owned).collect(),
            });
        }
        let controller: Controller = controller.parse()?;
        if !noise_multiplier.is_finite() || noise_multiplier < 0.0 {
            return Err(ActuationError::InvalidMultiplier {
                value: noise_multiplier,
            });
        }
        Ok(Self {
            amount,
            robot: robot.to_owned(),
            controller,
            noise_multiplier,
        })
    }

    /// The reference defaults: LoCoBot under ILQR, unit noise multiplier.
    pub fn with_defaults(amount: f64) -> Self {
        Self {
            amount,
            robot: DEFAULT_ROBOT.to_owned(),
            controller: Controller::Ilqr,
            noise_multiplier: 1.0,
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn robot(&self) -> &str {
        &self.robot
    }

    pub fn controller(&self) -> Controller {
        self.controller
    }

    pub fn noise_multiplier(&self) -> f64 {
        self.noise_multiplier
    }
}

const DEFAULT_ROBOT: &str = "LoCoBot";

/// Unvalidated mirror of [`ActuationSpec`] for deserialization.
#[derive(Debug, Deserialize)]
struct RawActuationSpec {
    amount: f64,
    #[serde(default = "default_robot")]
    robot: String,
    #[serde(default = "default_controller")]
    controller: String,
    #[serde(default = "default_multiplier")]
    noise_multiplier: f64,
}

fn default_robot() -> String {
    DEFAULT_ROBOT.to_owned()
}

fn default_controller() -> String {
    Controller::Ilqr.as_str().to_owned()
}

fn default_multiplier() -> f64 {
    1.0
}

impl TryFrom<RawActuationSpec> for ActuationSpec {
    type Error = ActuationError;

    fn try_from(raw: RawActuationSpec) -> Result<Self, Self::Error> {
        Self::new(raw.amount, &raw.robot, &raw.controller, raw.noise_multiplier)
    }
}

// veer_core/src/model.rs

use crate::error::UnknownControllerError;
use crate::gaussian::MultivariateGaussian;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The controller family a robot was driven by when its noise was fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Controller {
    #[serde(rename = "ILQR")]
    Ilqr,
    Proportional,
    Movebase,
}

impl Controller {
    pub const ALL: [Controller; 3] = [
        Controller::Ilqr,
        Controller::Proportional,
        Controller::Movebase,
    ];

    /// Canonical spelling, as it appears in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Controller::Ilqr => "ILQR",
            Controller::Proportional => "Proportional",
            Controller::Movebase => "Movebase",
        }
    }
}

impl fmt::Display for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Controller {
    type Err = UnknownControllerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ILQR" => Ok(Controller::Ilqr),
            "Proportional" => Ok(Controller::Proportional),
            "Movebase" => Ok(Controller::Movebase),
            other => Err(UnknownControllerError(other.to_owned())),
        }
    }
}

/// Linear (translation) vs rotational (yaw) category of a commanded motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionKind {
    Linear,
    Rotational,
}

/// Noise fitted to one kind of commanded motion.
///
/// `linear` is 2-D: along-track and cross-track displacement error, in
/// meters. `rotation` is 1-D: yaw error, in radians. Both components are
/// drawn on every actuation, so e.g. driving forward also perturbs heading.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionNoiseModel {
    pub linear: MultivariateGaussian,
    pub rotation: MultivariateGaussian,
}

impl MotionNoiseModel {
    pub fn new(linear: MultivariateGaussian, rotation: MultivariateGaussian) -> Self {
        Self { linear, rotation }
    }
}

/// The pair of motion noise models for one controller family.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerNoiseModel {
    pub linear_motion: MotionNoiseModel,
    pub rotational_motion: MotionNoiseModel,
}

impl ControllerNoiseModel {
    pub fn motion(&self, kind: MotionKind) -> &MotionNoiseModel {
        match kind {
            MotionKind::Linear => &self.linear_motion,
            MotionKind::Rotational => &self.rotational_motion,
        }
    }
}

/// All fitted controller models for one robot family.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotNoiseModel {
    pub ilqr: ControllerNoiseModel,
    pub proportional: ControllerNoiseModel,
    pub movebase: ControllerNoiseModel,
}

impl RobotNoiseModel {
    pub fn controller(&self, controller: Controller) -> &ControllerNoiseModel {
        match controller {
            Controller::Ilqr => &self.ilqr,
            Controller::Proportional => &self.proportional,
            Controller::Movebase => &self.movebase,
        }
    }
}

// veer_core/src/catalog.rs

//! The compiled-in table of empirically fitted actuation noise models.
//!
//! Parameters contributed from PyRobot (<https://pyrobot.org/>,
//! <https://github.com/facebookresearch/pyrobot>). Please cite PyRobot if
//! you use this noise model. The constants are empirical fits and must not
//! be edited without refitting against real hardware.

use crate::error::NoiseModelError;
use crate::gaussian::MultivariateGaussian;
use crate::model::{ControllerNoiseModel, MotionNoiseModel, RobotNoiseModel};
use nalgebra::DVector;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Read-only mapping from robot identifier to its fitted noise models.
///
/// Populated once at first use and immutable thereafter; there is no
/// mutation API and no lifecycle beyond process duration.
#[derive(Debug)]
pub struct NoiseModelCatalog {
    robots: BTreeMap<&'static str, RobotNoiseModel>,
}

impl NoiseModelCatalog {
    pub fn model_for(&self, robot: &str) -> Option<&RobotNoiseModel> {
        self.robots.get(robot)
    }

    pub fn contains(&self, robot: &str) -> bool {
        self.robots.contains_key(robot)
    }

    /// Known robot identifiers, in deterministic order.
    pub fn robots(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.robots.keys().copied()
    }
}

/// The process-wide catalog.
pub fn pyrobot_noise_models() -> &'static NoiseModelCatalog {
    static CATALOG: LazyLock<NoiseModelCatalog> = LazyLock::new(|| {
        build_catalog().expect("compiled-in noise tables are well-formed")
    });
    &CATALOG
}

fn mvn(mean: &[f64], variances: &[f64]) -> Result<MultivariateGaussian, NoiseModelError> {
    MultivariateGaussian::from_variances(
        DVector::from_row_slice(mean),
        DVector::from_row_slice(variances),
    )
}

#[allow(clippy::too_many_arguments)]
fn controller(
    lin_lin_mean: &[f64],
    lin_lin_var: &[f64],
    lin_rot_mean: &[f64],
    lin_rot_var: &[f64],
    rot_lin_mean: &[f64],
    rot_lin_var: &[f64],
    rot_rot_mean: &[f64],
    rot_rot_var: &[f64],
) -> Result<ControllerNoiseModel, NoiseModelError> {
    Ok(ControllerNoiseModel {
        linear_motion: MotionNoiseModel::new(
            mvn(lin_lin_mean, lin_lin_var)?,
            mvn(lin_rot_mean, lin_rot_var)?,
        ),
        rotational_motion: MotionNoiseModel::new(
            mvn(rot_lin_mean, rot_lin_var)?,
            mvn(rot_rot_mean, rot_rot_var)?,
        ),
    })
}

fn build_catalog() -> Result<NoiseModelCatalog, NoiseModelError> {
    let mut robots = BTreeMap::new();

    robots.insert(
        "LoCoBot",
        RobotNoiseModel {
            ilqr: controller(
                &[0.014, 0.009],
                &[0.006, 0.005],
                &[0.008],
                &[0.004],
                &[0.003, 0.003],
                &[0.002, 0.003],
                &[0.023],
                &[0.012],
            )?,
            proportional: controller(
                &[0.017, 0.042],
                &[0.007, 0.023],
                &[0.031],
                &[0.026],
                &[0.001, 0.005],
                &[0.001, 0.004],
                &[0.043],
                &[0.017],
            )?,
            movebase: controller(
                &[0.074, 0.036],
                &[0.019, 0.033],
                &[0.189],
                &[0.038],
                &[0.002, 0.003],
                &[0.0, 0.002],
                &[0.219],
                &[0.019],
            )?,
        },
    );

    robots.insert(
        "LoCoBot-Lite",
        RobotNoiseModel {
            ilqr: controller(
                &[0.142, 0.023],
                &[0.008, 0.008],
                &[0.031],
                &[0.028],
                &[0.002, 0.002],
                &[0.001, 0.002],
                &[0.122],
                &[0.03],
            )?,
            proportional: controller(
                &[0.135, 0.043],
                &[0.007, 0.009],
                &[0.049],
                &[0.009],
                &[0.002, 0.002],
                &[0.002, 0.001],
                &[0.054],
                &[0.061],
            )?,
            movebase: controller(
                &[0.192, 0.117],
                &[0.055, 0.144],
                &[0.128],
                &[0.143],
                &[0.002, 0.001],
                &[0.001, 0.001],
                &[0.173],
                &[0.025],
            )?,
        },
    );

    Ok(NoiseModelCatalog { robots })
}

// veer_core/src/prelude.rs

// --- Core Abstractions (The main contracts of the library) ---
pub use crate::node::SceneNode;
pub use crate::sampler::GaussianSampler;

// --- Core Data Structures (The "nouns" of the library) ---
pub use crate::gaussian::MultivariateGaussian;
pub use crate::model::{
    Controller, ControllerNoiseModel, MotionKind, MotionNoiseModel, RobotNoiseModel,
};

// --- Catalog Access ---
pub use crate::catalog::{pyrobot_noise_models, NoiseModelCatalog};

// --- Errors ---
pub use crate::error::{NoiseModelError, UnknownControllerError};

// veer_core/src/lib.rs

// This file defines the public modules of the library.
pub mod catalog;
pub mod error;
pub mod gaussian;
pub mod model;
pub mod node;
pub mod prelude;
pub mod sampler;

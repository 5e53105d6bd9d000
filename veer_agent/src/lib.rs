// veer_agent/src/lib.rs

pub mod controls;
pub mod error;
pub mod node;
pub mod prelude;
pub mod registry;
pub mod spec;

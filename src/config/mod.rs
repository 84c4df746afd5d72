//! Engine policy configuration.
//!
//! This module provides the engine's policy configuration, loadable from a
//! YAML file, including the rounding policy for fractional paid-leave days.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/engine.yaml").unwrap();
//! println!("Leave rounding: {:?}", config.config().leave_rounding);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, LeaveRounding};

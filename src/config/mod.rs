//! Configuration module for cable-winch.
//!
//! Provides types for loading and validating winch parameter sets and the
//! robot's winch layout from TOML files (with `std` feature) or pre-parsed data.

mod params;
mod system;
pub mod units;
mod winch;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use params::WinchParams;
pub use system::{RobotConfig, MAX_PARAM_SETS, MAX_WINCHES};
pub use validation::{validate_config, validate_params};
pub use winch::WinchConfig;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Counts, Meters, MetersPerSec};

//! # cable-winch
//!
//! Winch and cable kinematic model for cable-driven parallel robots, mapping
//! joint-space set-points onto servo drive commands.
//!
//! ## Features
//!
//! - **Counts <-> length mapping**: linear conversion derived from drum geometry
//! - **Homing bookkeeping**: home length and home encoder position recorded as one pair
//! - **Drive abstraction**: any servo drive implementing [`ServoDrive`]
//! - **Configuration-driven**: define parameter sets and winches in TOML files
//! - **Fixed-period control loop**: dispatches cable length, position, speed or torque set-points
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cable_winch::{Meters, WinchSystem};
//!
//! // Load configuration from TOML
//! let system = WinchSystem::from_config(cable_winch::load_config("robot.toml")?);
//!
//! // Attach a servo drive to a configured winch
//! let mut winch = system.build_winch("w0", drive)?;
//!
//! // Calibrate against a measured cable length, then command lengths
//! winch.home(Meters(1.20));
//! winch.set_target_length(Meters(1.35));
//!
//! let status = winch.status();
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets
//! - `log`: Enables `log` logging for hosted targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod logging;

// Core modules
pub mod config;
pub mod control;
pub mod drive;
pub mod error;
pub mod winch;

// Re-exports for ergonomic API
pub use config::{validate_config, RobotConfig, WinchConfig, WinchParams};
pub use control::{ControlLoop, ControlMode, CycleReport, WinchCommand};
pub use drive::{op_mode, DriveStatus, ServoDrive, SimulatedDrive};
pub use error::{Error, Result};
pub use winch::{Cable, CalibrationState, Winch, WinchBuilder, WinchStatus, WinchSystem};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Counts, Meters, MetersPerSec, UnitExt};

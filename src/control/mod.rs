//! Control module for cable-winch.
//!
//! Provides control modes, typed set-points and the fixed-period loop that
//! dispatches them to a set of winches.

mod executor;
mod mode;

pub use executor::{ControlLoop, CycleReport, CycleStatuses};
pub use mode::{ControlMode, WinchCommand};

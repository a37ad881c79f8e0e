//! Winch module for cable-winch.
//!
//! Provides the cable length model, the winch unit that maps encoder counts
//! to cable length, and facades for building winches from configuration.

mod builder;
mod cable;
mod state;
mod status;
mod system;
mod unit;

pub use builder::WinchBuilder;
pub use cable::Cable;
pub use state::CalibrationState;
pub use status::WinchStatus;
pub use system::WinchSystem;
pub use unit::Winch;

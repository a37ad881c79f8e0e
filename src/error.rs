//! Error types for cable-winch library.
//!
//! Core winch operations are total and never fail; errors come from loading
//! configuration, building winches and running the control loop.

use core::fmt;

use crate::control::ControlMode;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all cable-winch operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Set-point dispatch error
    Command(CommandError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Winch name not found in configuration
    WinchNotFound(heapless::String<32>),
    /// Winch references a parameter set that does not exist
    ParamSetNotFound {
        /// Winch name
        winch: heapless::String<32>,
        /// Referenced parameter set name
        params: heapless::String<32>,
    },
    /// Two winches share a logical id
    DuplicateWinchId(u8),
    /// Two winches share a bus address
    DuplicateSlavePosition(u8),
    /// Invalid counts per revolution (must be > 0)
    InvalidCountsPerRevolution(u32),
    /// Invalid drum radius (must be > 0)
    InvalidDrumRadius(f64),
    /// Invalid drum pitch (must be >= 0)
    InvalidDrumPitch(f64),
    /// Invalid gear ratio (must be > 0)
    InvalidGearRatio(f64),
    /// Invalid length-per-count override (must be finite and non-zero)
    InvalidLengthPerCount(f64),
    /// A required builder field was not set
    MissingField(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Control loop set-point errors.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    /// The loop has no control mode selected
    NoControlMode,
    /// A set-point does not belong to the active control mode
    ModeMismatch {
        /// Active control mode
        mode: ControlMode,
        /// Index of the offending winch in the cycle
        winch: usize,
    },
    /// Number of set-points differs from the number of winches
    SetpointCount {
        /// Number of winches driven by the loop
        expected: usize,
        /// Number of set-points supplied
        actual: usize,
    },
    /// More winches than a single cycle can report
    TooManyWinches(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Command(e) => write!(f, "Command error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::WinchNotFound(name) => write!(f, "Winch '{}' not found", name),
            ConfigError::ParamSetNotFound { winch, params } => {
                write!(f, "Winch '{}' references unknown parameter set '{}'", winch, params)
            }
            ConfigError::DuplicateWinchId(id) => write!(f, "Duplicate winch id: {}", id),
            ConfigError::DuplicateSlavePosition(pos) => {
                write!(f, "Duplicate slave position: {}", pos)
            }
            ConfigError::InvalidCountsPerRevolution(v) => {
                write!(f, "Invalid counts per revolution: {}. Must be > 0", v)
            }
            ConfigError::InvalidDrumRadius(v) => write!(f, "Invalid drum radius: {}. Must be > 0", v),
            ConfigError::InvalidDrumPitch(v) => write!(f, "Invalid drum pitch: {}. Must be >= 0", v),
            ConfigError::InvalidGearRatio(v) => write!(f, "Invalid gear ratio: {}. Must be > 0", v),
            ConfigError::InvalidLengthPerCount(v) => {
                write!(f, "Invalid length per count: {}. Must be finite and non-zero", v)
            }
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::NoControlMode => write!(f, "No control mode selected"),
            CommandError::ModeMismatch { mode, winch } => {
                write!(f, "Set-point for winch {} does not match control mode {:?}", winch, mode)
            }
            CommandError::SetpointCount { expected, actual } => {
                write!(f, "Expected {} set-points, got {}", expected, actual)
            }
            CommandError::TooManyWinches(n) => write!(f, "Too many winches in one cycle: {}", n),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self {
        Error::Command(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}

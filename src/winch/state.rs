//! Calibration state of a winch.

/// Whether a winch's length readings are physically meaningful.
///
/// A winch starts `Uncalibrated` and becomes `Homed` on its first homing.
/// Re-homing keeps it `Homed`; there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationState {
    /// No homing yet: lengths are relative to home length 0 at encoder position 0.
    #[default]
    Uncalibrated,
    /// Homed at least once.
    Homed,
}

impl CalibrationState {
    /// Get the state name as a static string.
    pub fn name(self) -> &'static str {
        match self {
            CalibrationState::Uncalibrated => "Uncalibrated",
            CalibrationState::Homed => "Homed",
        }
    }

    /// Check whether length readings are physically meaningful.
    #[inline]
    pub fn is_calibrated(self) -> bool {
        self == CalibrationState::Homed
    }
}

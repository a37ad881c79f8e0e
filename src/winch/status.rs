//! Winch status snapshot.

use crate::config::units::{Counts, Meters};
use crate::drive::DriveStatus;

/// Consistent snapshot of one winch, taken from a single drive read.
///
/// `cable_length` and `motor_position` always come from the same sample.
/// The length is only physically meaningful when `calibrated` is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WinchStatus {
    /// Logical actuator index.
    pub id: u8,
    /// Raw drive feedback, passed through unmodified.
    pub drive: DriveStatus,
    /// Cable length derived from `motor_position`.
    pub cable_length: Meters,
    /// Raw motor position.
    pub motor_position: Counts,
    /// Whether the winch had been homed when the snapshot was taken.
    pub calibrated: bool,
}

impl WinchStatus {
    /// Check whether the drive reported a fault in this sample.
    #[inline]
    pub fn is_faulted(&self) -> bool {
        self.drive.is_faulted()
    }
}

//! Servo drive abstraction.
//!
//! The winch model talks to its motor controller only through [`ServoDrive`].
//! The transport behind it (EtherCAT, CAN, simulation) is not this crate's
//! concern; communication failures are handled below this interface and
//! drive-side faults surface as bits in [`DriveStatus::status_word`].

mod sim;

pub use sim::{DriveCommand, SimulatedDrive};

/// CiA 402 modes of operation accepted by [`ServoDrive::change_op_mode`].
pub mod op_mode {
    /// No mode selected.
    pub const NONE: i8 = 0;
    /// Profile position mode.
    pub const PROFILE_POSITION: i8 = 1;
    /// Profile velocity mode.
    pub const PROFILE_VELOCITY: i8 = 3;
    /// Profile torque mode.
    pub const PROFILE_TORQUE: i8 = 4;
    /// Homing mode.
    pub const HOMING: i8 = 6;
    /// Cyclic synchronous position mode.
    pub const CYCLIC_POSITION: i8 = 8;
    /// Cyclic synchronous velocity mode.
    pub const CYCLIC_VELOCITY: i8 = 9;
    /// Cyclic synchronous torque mode.
    pub const CYCLIC_TORQUE: i8 = 10;
}

/// One feedback sample read from a servo drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriveStatus {
    /// Actual motor position in encoder counts.
    pub position: i32,
    /// Actual motor velocity in counts per second.
    pub velocity: i32,
    /// Actual torque in per-mille of rated torque.
    pub torque: i16,
    /// CiA 402 status word, including fault and warning bits.
    pub status_word: u16,
    /// Mode of operation currently displayed by the drive.
    pub op_mode: i8,
}

impl DriveStatus {
    /// Status word bit raised when the drive is in a fault state.
    pub const FAULT_BIT: u16 = 1 << 3;

    /// Status word bit raised when the drive reports a warning.
    pub const WARNING_BIT: u16 = 1 << 7;

    /// Check whether the drive reports a fault.
    #[inline]
    pub fn is_faulted(&self) -> bool {
        self.status_word & Self::FAULT_BIT != 0
    }

    /// Check whether the drive reports a warning.
    #[inline]
    pub fn has_warning(&self) -> bool {
        self.status_word & Self::WARNING_BIT != 0
    }
}

/// Capability to query and command one servo drive.
///
/// Every call is synchronous and completes within one drive round-trip.
/// Implementations must not block indefinitely.
pub trait ServoDrive {
    /// Read the latest feedback from the drive.
    fn drive_status(&mut self) -> DriveStatus;

    /// Command a target position in encoder counts.
    fn change_position(&mut self, target: i32);

    /// Command a target velocity in counts per second.
    fn change_velocity(&mut self, target: i32);

    /// Command a target torque in per-mille of rated torque.
    fn change_torque(&mut self, target: i16);

    /// Switch the drive's mode of operation.
    fn change_op_mode(&mut self, mode: i8);

    /// Read only the actual position.
    #[inline]
    fn position(&mut self) -> i32 {
        self.drive_status().position
    }
}

impl<D: ServoDrive + ?Sized> ServoDrive for &mut D {
    #[inline]
    fn drive_status(&mut self) -> DriveStatus {
        D::drive_status(self)
    }

    #[inline]
    fn change_position(&mut self, target: i32) {
        D::change_position(self, target)
    }

    #[inline]
    fn change_velocity(&mut self, target: i32) {
        D::change_velocity(self, target)
    }

    #[inline]
    fn change_torque(&mut self, target: i16) {
        D::change_torque(self, target)
    }

    #[inline]
    fn change_op_mode(&mut self, mode: i8) {
        D::change_op_mode(self, mode)
    }

    #[inline]
    fn position(&mut self) -> i32 {
        D::position(self)
    }
}

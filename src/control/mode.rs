//! Control modes and typed set-points.

use crate::config::units::{Counts, Meters, MetersPerSec};
use crate::drive::op_mode;

/// Joint-space quantity a trajectory prescribes for every winch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlMode {
    /// Cable lengths in meters.
    CableLength,
    /// Motor positions in counts.
    MotorPosition,
    /// Cable speeds in meters per second.
    CableSpeed,
    /// Motor speeds in counts per second.
    MotorSpeed,
    /// Motor torques.
    MotorTorque,
    /// No trajectory.
    #[default]
    None,
}

impl ControlMode {
    /// Drive mode of operation that executes this control mode.
    pub fn op_mode(self) -> Option<i8> {
        match self {
            ControlMode::CableLength | ControlMode::MotorPosition => {
                Some(op_mode::CYCLIC_POSITION)
            }
            ControlMode::CableSpeed | ControlMode::MotorSpeed => Some(op_mode::CYCLIC_VELOCITY),
            ControlMode::MotorTorque => Some(op_mode::CYCLIC_TORQUE),
            ControlMode::None => None,
        }
    }

    /// Only position-like modes can be paused in place.
    #[inline]
    pub fn is_pausable(self) -> bool {
        matches!(self, ControlMode::CableLength | ControlMode::MotorPosition)
    }

    /// Check whether a set-point belongs to this mode.
    pub fn accepts(self, command: &WinchCommand) -> bool {
        matches!(
            (self, command),
            (_, WinchCommand::Hold)
                | (ControlMode::CableLength, WinchCommand::Length(_))
                | (ControlMode::MotorPosition, WinchCommand::Position(_))
                | (ControlMode::CableSpeed, WinchCommand::CableSpeed(_))
                | (ControlMode::MotorSpeed, WinchCommand::Velocity(_))
                | (ControlMode::MotorTorque, WinchCommand::Torque(_))
        )
    }
}

/// One set-point for one winch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WinchCommand {
    /// Target cable length.
    Length(Meters),
    /// Target motor position.
    Position(Counts),
    /// Target cable speed.
    CableSpeed(MetersPerSec),
    /// Target motor velocity in counts per second.
    Velocity(i32),
    /// Target motor torque.
    Torque(i16),
    /// Send nothing this cycle.
    Hold,
}

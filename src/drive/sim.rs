//! Ideal in-memory servo drive.

use super::{DriveStatus, ServoDrive};

/// A command received by a [`SimulatedDrive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveCommand {
    /// `change_position` with its target.
    Position(i32),
    /// `change_velocity` with its target.
    Velocity(i32),
    /// `change_torque` with its target.
    Torque(i16),
    /// `change_op_mode` with its mode.
    OpMode(i8),
}

/// Servo drive that reaches every target instantly.
///
/// Useful for dry runs and tests: position and mode commands are reflected in
/// the next status read, and the last command plus command and read counts
/// are kept for inspection. Motion can also be injected with
/// [`SimulatedDrive::jog_to`] to stand in for external forces moving the
/// cable, or with [`SimulatedDrive::with_creep`] to move on every read.
#[derive(Debug, Clone, Default)]
pub struct SimulatedDrive {
    status: DriveStatus,
    last_command: Option<DriveCommand>,
    command_count: u32,
    read_count: u32,
    creep: i32,
}

impl SimulatedDrive {
    /// Create a drive at position 0 with no mode selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a drive reporting the given position.
    pub fn at(position: i32) -> Self {
        Self {
            status: DriveStatus {
                position,
                ..DriveStatus::default()
            },
            ..Self::default()
        }
    }

    /// Advance the encoder by `counts_per_read` after every status read.
    pub fn with_creep(mut self, counts_per_read: i32) -> Self {
        self.creep = counts_per_read;
        self
    }

    /// Move the encoder without issuing a command.
    pub fn jog_to(&mut self, position: i32) {
        self.status.position = position;
    }

    /// Overwrite the status word, e.g. to raise a fault.
    pub fn set_status_word(&mut self, status_word: u16) {
        self.status.status_word = status_word;
    }

    /// The most recent command, if any.
    pub fn last_command(&self) -> Option<DriveCommand> {
        self.last_command
    }

    /// Number of commands received since creation.
    pub fn command_count(&self) -> u32 {
        self.command_count
    }

    /// Number of status reads since creation.
    pub fn read_count(&self) -> u32 {
        self.read_count
    }

    fn record(&mut self, command: DriveCommand) {
        self.last_command = Some(command);
        self.command_count = self.command_count.wrapping_add(1);
    }
}

impl ServoDrive for SimulatedDrive {
    fn drive_status(&mut self) -> DriveStatus {
        let sample = self.status;
        self.read_count = self.read_count.wrapping_add(1);
        self.status.position = self.status.position.wrapping_add(self.creep);
        sample
    }

    fn change_position(&mut self, target: i32) {
        self.status.position = target;
        self.record(DriveCommand::Position(target));
    }

    fn change_velocity(&mut self, target: i32) {
        self.status.velocity = target;
        self.record(DriveCommand::Velocity(target));
    }

    fn change_torque(&mut self, target: i16) {
        self.status.torque = target;
        self.record(DriveCommand::Torque(target));
    }

    fn change_op_mode(&mut self, mode: i8) {
        self.status.op_mode = mode;
        self.record(DriveCommand::OpMode(mode));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_are_recorded() {
        let mut drive = SimulatedDrive::at(100);
        assert_eq!(drive.drive_status().position, 100);
        assert_eq!(drive.command_count(), 0);

        drive.change_velocity(-250);
        drive.change_torque(12);

        assert_eq!(drive.last_command(), Some(DriveCommand::Torque(12)));
        assert_eq!(drive.command_count(), 2);
        let status = drive.drive_status();
        assert_eq!(status.velocity, -250);
        assert_eq!(status.torque, 12);
        assert_eq!(status.position, 100);
    }

    #[test]
    fn test_creep_moves_after_each_read() {
        let mut drive = SimulatedDrive::at(10).with_creep(5);
        assert_eq!(drive.drive_status().position, 10);
        assert_eq!(drive.position(), 15);
        assert_eq!(drive.read_count(), 2);
        assert_eq!(drive.command_count(), 0);
    }

    #[test]
    fn test_jog_is_not_a_command() {
        let mut drive = SimulatedDrive::new();
        drive.jog_to(-7);
        assert_eq!(drive.position(), -7);
        assert_eq!(drive.command_count(), 0);
    }
}

//! Winch unit: counts <-> cable length mapping and drive command dispatch.

use crate::config::units::{Counts, Meters, MetersPerSec};
use crate::config::WinchParams;
use crate::control::WinchCommand;
use crate::drive::ServoDrive;

use super::cable::Cable;
use super::state::CalibrationState;
use super::status::WinchStatus;

/// One actuator of the robot: a servo drive spooling one cable.
///
/// The winch is the only place where encoder counts and cable lengths meet.
/// All lengths are measured from the reference pair recorded by
/// [`Winch::home`]: the drive position and the cable length at the same
/// instant. That pair can only be written through `home`.
///
/// Generic over:
/// - `'p`: lifetime of the shared parameter set
/// - `D`: servo drive handle (an owned drive or `&mut` to one)
///
/// A winch is not internally synchronized. Every mutating call takes
/// `&mut self`, so callers sharing one across threads must wrap it in a lock.
pub struct Winch<'p, D>
where
    D: ServoDrive,
{
    /// Logical actuator index.
    id: u8,

    /// Bus address of the drive, passed through opaquely.
    slave_position: u8,

    /// Shared physical constants.
    params: &'p WinchParams,

    /// Drive position at the last homing.
    servo_home_position: Counts,

    /// Cable length model.
    cable: Cable,

    /// Servo drive handle.
    drive: D,

    /// Whether `home` has been called.
    calibration: CalibrationState,

    /// Fault bit seen in the previous status read.
    faulted: bool,
}

impl<'p, D> Winch<'p, D>
where
    D: ServoDrive,
{
    /// Create an uncalibrated winch.
    pub fn new(id: u8, slave_position: u8, params: &'p WinchParams, drive: D) -> Self {
        Self {
            id,
            slave_position,
            params,
            servo_home_position: Counts::default(),
            cable: Cable::default(),
            drive,
            calibration: CalibrationState::Uncalibrated,
            faulted: false,
        }
    }

    /// Get the logical actuator index.
    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Get the drive bus address.
    #[inline]
    pub fn slave_position(&self) -> u8 {
        self.slave_position
    }

    /// Get the shared parameter set.
    #[inline]
    pub fn params(&self) -> &'p WinchParams {
        self.params
    }

    /// Drive position recorded at the last homing.
    #[inline]
    pub fn servo_home_position(&self) -> Counts {
        self.servo_home_position
    }

    /// Get the cable model.
    #[inline]
    pub fn cable(&self) -> &Cable {
        &self.cable
    }

    /// Get the drive handle.
    #[inline]
    pub fn drive(&self) -> &D {
        &self.drive
    }

    /// Get mutable access to the drive handle.
    ///
    /// The home reference is unaffected; commands sent this way bypass the
    /// length mapping.
    #[inline]
    pub fn drive_mut(&mut self) -> &mut D {
        &mut self.drive
    }

    /// Release the drive handle.
    pub fn into_drive(self) -> D {
        self.drive
    }

    /// Get the calibration state.
    #[inline]
    pub fn calibration(&self) -> CalibrationState {
        self.calibration
    }

    /// Check whether length readings are physically meaningful.
    #[inline]
    pub fn is_calibrated(&self) -> bool {
        self.calibration.is_calibrated()
    }

    /// Convert a count displacement to a cable length displacement.
    #[inline]
    pub fn counts_to_length(&self, counts: Counts) -> Meters {
        self.params.counts_to_length(counts)
    }

    /// Convert a cable length displacement to counts, truncating toward zero.
    ///
    /// A `counts -> length -> counts` round trip may land one count short.
    #[inline]
    pub fn length_to_counts(&self, length: Meters) -> Counts {
        self.params.length_to_counts(length)
    }

    /// Read the drive once and return a consistent snapshot.
    ///
    /// Also refreshes the cable model. Before the first homing the returned
    /// length is not physically meaningful; see [`WinchStatus::calibrated`].
    pub fn status(&mut self) -> WinchStatus {
        let drive = self.drive.drive_status();
        let motor_position = Counts(drive.position);
        let delta = self.counts_to_length(motor_position.since(self.servo_home_position));
        let cable_length = self.cable.refresh(delta);

        let faulted = drive.is_faulted();
        if faulted && !self.faulted {
            log_warn!("winch {}: drive fault, status word {}", self.id, drive.status_word);
        } else if !faulted && self.faulted {
            log_info!("winch {}: drive fault cleared", self.id);
        }
        self.faulted = faulted;

        WinchStatus {
            id: self.id,
            drive,
            cable_length,
            motor_position,
            calibrated: self.is_calibrated(),
        }
    }

    /// Record the current drive position as the reference for `current_length`.
    ///
    /// Home length and home position are written together from one drive
    /// read, with no command issued in between. The cable model is refreshed
    /// so an immediate [`Winch::status`] reports `current_length` exactly.
    pub fn home(&mut self, current_length: Meters) {
        let position = Counts(self.drive.position());

        self.cable.set_home_length(current_length);
        self.servo_home_position = position;
        self.cable.update_length(Meters::default());
        self.calibration = CalibrationState::Homed;

        log_info!(
            "winch {}: homed at {} counts, cable length {} m",
            self.id,
            position.0,
            current_length.0
        );
    }

    /// Command the drive to the position matching a cable length.
    ///
    /// The target is not range checked; that belongs to the drive or an
    /// outer safety layer.
    pub fn set_target_length(&mut self, target: Meters) {
        let delta = self.length_to_counts(target - self.cable.home_length());
        let counts = self.servo_home_position.offset(delta);
        log_trace!("winch {}: length {} m -> {} counts", self.id, target.0, counts.0);
        self.drive.change_position(counts.0);
    }

    /// Command a raw motor position.
    #[inline]
    pub fn set_target_position(&mut self, target: Counts) {
        self.drive.change_position(target.0);
    }

    /// Command a cable speed, converted to counts per second.
    pub fn set_target_cable_speed(&mut self, target: MetersPerSec) {
        let counts_per_sec = self.params.speed_to_counts(target);
        self.drive.change_velocity(counts_per_sec);
    }

    /// Command a motor velocity in counts per second.
    #[inline]
    pub fn set_target_velocity(&mut self, target: i32) {
        self.drive.change_velocity(target);
    }

    /// Command a motor torque.
    #[inline]
    pub fn set_target_torque(&mut self, target: i16) {
        self.drive.change_torque(target);
    }

    /// Switch the drive's mode of operation.
    #[inline]
    pub fn set_operating_mode(&mut self, mode: i8) {
        self.drive.change_op_mode(mode);
    }

    /// Dispatch a typed set-point.
    pub fn apply(&mut self, command: WinchCommand) {
        match command {
            WinchCommand::Length(length) => self.set_target_length(length),
            WinchCommand::Position(counts) => self.set_target_position(counts),
            WinchCommand::CableSpeed(speed) => self.set_target_cable_speed(speed),
            WinchCommand::Velocity(velocity) => self.set_target_velocity(velocity),
            WinchCommand::Torque(torque) => self.set_target_torque(torque),
            WinchCommand::Hold => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drive::{op_mode, DriveCommand, DriveStatus, SimulatedDrive};

    fn millimeter_params() -> WinchParams {
        WinchParams::from_factor(Meters(0.001))
    }

    #[test]
    fn test_uncalibrated_status() {
        let params = millimeter_params();
        let mut winch = Winch::new(2, 5, &params, SimulatedDrive::at(300));

        let status = winch.status();
        assert_eq!(status.id, 2);
        assert!(!status.calibrated);
        assert_eq!(status.motor_position, Counts(300));
        assert!((status.cable_length.0 - 0.3).abs() < 1e-12);
        assert_eq!(winch.calibration().name(), "Uncalibrated");
    }

    #[test]
    fn test_home_then_move() {
        let params = millimeter_params();
        let mut winch = Winch::new(0, 1, &params, SimulatedDrive::at(10_000));

        winch.home(Meters(0.5));
        assert!(winch.is_calibrated());
        assert_eq!(winch.servo_home_position(), Counts(10_000));
        assert_eq!(winch.status().cable_length, Meters(0.5));

        // Cable pulled out by 500 counts
        winch.drive_mut().jog_to(10_500);
        let status = winch.status();
        assert_eq!(status.motor_position, Counts(10_500));
        assert_eq!(status.cable_length, Meters(1.0));
    }

    #[test]
    fn test_home_does_not_command_drive() {
        let params = millimeter_params();
        let mut winch = Winch::new(0, 1, &params, SimulatedDrive::at(77));

        winch.home(Meters(1.0));
        assert_eq!(winch.drive().command_count(), 0);
    }

    #[test]
    fn test_target_length_command() {
        let params = millimeter_params();
        let mut winch = Winch::new(0, 1, &params, SimulatedDrive::at(10_000));
        winch.home(Meters(0.5));

        winch.set_target_length(Meters(0.75));
        assert_eq!(
            winch.drive().last_command(),
            Some(DriveCommand::Position(10_250))
        );
    }

    #[test]
    fn test_apply_dispatch() {
        let params = millimeter_params();
        let mut winch = Winch::new(0, 1, &params, SimulatedDrive::new());

        winch.apply(WinchCommand::CableSpeed(MetersPerSec(0.05)));
        assert_eq!(winch.drive().last_command(), Some(DriveCommand::Velocity(50)));

        winch.apply(WinchCommand::Position(Counts(-3)));
        assert_eq!(winch.drive().last_command(), Some(DriveCommand::Position(-3)));

        winch.apply(WinchCommand::Hold);
        assert_eq!(winch.drive().command_count(), 2);

        winch.set_operating_mode(op_mode::CYCLIC_TORQUE);
        assert_eq!(
            winch.drive().last_command(),
            Some(DriveCommand::OpMode(op_mode::CYCLIC_TORQUE))
        );
    }

    #[test]
    fn test_status_passes_fault_through() {
        let params = millimeter_params();
        let mut drive = SimulatedDrive::new();
        drive.set_status_word(0x0008);
        let mut winch = Winch::new(0, 1, &params, drive);

        let status = winch.status();
        assert!(status.is_faulted());
        assert_eq!(status.drive.status_word, 0x0008);
    }

    #[test]
    fn test_fault_edge_is_latched() {
        let params = millimeter_params();
        let mut winch = Winch::new(0, 1, &params, SimulatedDrive::new());
        assert!(!winch.faulted);

        winch.drive_mut().set_status_word(DriveStatus::FAULT_BIT);
        winch.status();
        assert!(winch.faulted);

        // Still faulted: no new edge
        assert!(winch.status().is_faulted());
        assert!(winch.faulted);

        winch.drive_mut().set_status_word(0);
        assert!(!winch.status().is_faulted());
        assert!(!winch.faulted);
    }

    #[test]
    fn test_status_reads_drive_once() {
        let params = millimeter_params();
        let mut winch = Winch::new(0, 1, &params, SimulatedDrive::at(1_000).with_creep(7));

        let status = winch.status();
        assert_eq!(winch.drive().read_count(), 1);
        assert_eq!(status.motor_position, Counts(1_000));
        assert_eq!(status.drive.position, 1_000);
        assert!((status.cable_length.0 - 1.0).abs() < 1e-12);
        assert_eq!(winch.cable().current(), status.cable_length);

        // The drive moved after the first read; the next snapshot follows it
        let status = winch.status();
        assert_eq!(winch.drive().read_count(), 2);
        assert_eq!(status.motor_position, Counts(1_007));
        assert!((status.cable_length.0 - 1.007).abs() < 1e-12);
    }

    #[test]
    fn test_home_reads_drive_once() {
        let params = millimeter_params();
        let mut winch = Winch::new(0, 1, &params, SimulatedDrive::at(10_000).with_creep(3));

        winch.home(Meters(0.5));
        assert_eq!(winch.drive().read_count(), 1);
        assert_eq!(winch.servo_home_position(), Counts(10_000));
        assert_eq!(winch.cable().current(), Meters(0.5));
        assert_eq!(winch.drive().command_count(), 0);

        // Home pair came from the single read at 10_000
        let status = winch.status();
        assert_eq!(status.motor_position, Counts(10_003));
        assert!((status.cable_length.0 - 0.503).abs() < 1e-12);
    }
}

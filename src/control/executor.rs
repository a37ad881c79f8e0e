//! Fixed-period control loop over a set of winches.

use core::ops::ControlFlow;

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::config::MAX_WINCHES;
use crate::drive::ServoDrive;
use crate::error::{CommandError, Error, Result};
use crate::winch::{Winch, WinchStatus};

use super::mode::{ControlMode, WinchCommand};

/// Statuses of every winch polled in one cycle, in winch order.
pub type CycleStatuses = Vec<WinchStatus, MAX_WINCHES>;

/// Progress of a running trajectory, handed to the caller after each cycle.
#[derive(Debug, Clone)]
pub struct CycleReport {
    /// Zero-based index of the cycle just completed.
    pub cycle: u32,
    /// Nominal time since the start of the run, in seconds: completed
    /// cycles times the period. Poll and dispatch time is not included.
    pub elapsed_s: f64,
    /// Completed share of the run, 0 to 100.
    pub progress_percent: u8,
    /// Statuses polled before this cycle's set-points were dispatched.
    pub statuses: CycleStatuses,
}

/// Drives a set of winches at a fixed period.
///
/// Each cycle polls every winch once, then dispatches at most one set-point
/// per winch, then waits one period. Set-points are checked against the
/// active [`ControlMode`] before anything is sent, so a rejected cycle leaves
/// every drive untouched.
#[derive(Debug)]
pub struct ControlLoop<DELAY>
where
    DELAY: DelayNs,
{
    /// Delay provider for the cycle period.
    delay: DELAY,

    /// Cycle period in nanoseconds.
    period_ns: u32,

    /// Quantity the set-points prescribe.
    mode: ControlMode,

    /// Cycles completed since creation.
    cycles: u32,
}

impl<DELAY> ControlLoop<DELAY>
where
    DELAY: DelayNs,
{
    /// Create a loop with no control mode selected.
    pub fn new(delay: DELAY, period_ns: u32) -> Self {
        Self {
            delay,
            period_ns,
            mode: ControlMode::None,
            cycles: 0,
        }
    }

    /// Create a loop with a control mode.
    pub fn with_mode(delay: DELAY, period_ns: u32, mode: ControlMode) -> Self {
        Self {
            mode,
            ..Self::new(delay, period_ns)
        }
    }

    /// Get the active control mode.
    #[inline]
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    /// Select a control mode. Call [`ControlLoop::engage`] to apply it to the drives.
    #[inline]
    pub fn set_mode(&mut self, mode: ControlMode) {
        self.mode = mode;
    }

    /// Get the cycle period in nanoseconds.
    #[inline]
    pub fn period_ns(&self) -> u32 {
        self.period_ns
    }

    /// Cycles completed since creation.
    #[inline]
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Release the delay provider.
    pub fn into_delay(self) -> DELAY {
        self.delay
    }

    /// Check whether the active mode allows pausing mid-trajectory.
    #[inline]
    pub fn is_pausable(&self) -> bool {
        self.mode.is_pausable()
    }

    /// Switch every drive to the mode of operation of the active control mode.
    ///
    /// # Errors
    ///
    /// Returns an error if no control mode is selected.
    pub fn engage<D>(&mut self, winches: &mut [Winch<'_, D>]) -> Result<()>
    where
        D: ServoDrive,
    {
        let op_mode = self
            .mode
            .op_mode()
            .ok_or(Error::Command(CommandError::NoControlMode))?;

        for winch in winches.iter_mut() {
            winch.set_operating_mode(op_mode);
        }

        log_info!("engaged {} winches in op mode {}", winches.len(), op_mode);
        Ok(())
    }

    /// Run one cycle: poll, dispatch, wait.
    ///
    /// # Errors
    ///
    /// Returns an error, without touching any drive, if the number of
    /// set-points differs from the number of winches or a set-point does not
    /// match the active mode.
    pub fn run_cycle<D>(
        &mut self,
        winches: &mut [Winch<'_, D>],
        setpoints: &[WinchCommand],
    ) -> Result<CycleStatuses>
    where
        D: ServoDrive,
    {
        self.check(winches.len(), setpoints)?;

        let mut statuses = CycleStatuses::new();
        for (winch, setpoint) in winches.iter_mut().zip(setpoints) {
            // Capacity was checked above
            let _ = statuses.push(winch.status());
            winch.apply(*setpoint);
        }

        self.cycles = self.cycles.wrapping_add(1);
        self.delay.delay_ns(self.period_ns);
        Ok(statuses)
    }

    /// Run one cycle per frame of set-points.
    ///
    /// `on_cycle` receives a [`CycleReport`] after every cycle and may return
    /// `ControlFlow::Break` to stop early. Returns the number of cycles run.
    ///
    /// # Errors
    ///
    /// Stops at the first frame rejected by [`ControlLoop::run_cycle`].
    pub fn run<D, I, F, C>(
        &mut self,
        winches: &mut [Winch<'_, D>],
        frames: I,
        mut on_cycle: C,
    ) -> Result<u32>
    where
        D: ServoDrive,
        I: IntoIterator<Item = F>,
        I::IntoIter: ExactSizeIterator,
        F: AsRef<[WinchCommand]>,
        C: FnMut(CycleReport) -> ControlFlow<()>,
    {
        let frames = frames.into_iter();
        let total = frames.len();
        let mut completed = 0u32;

        for frame in frames {
            let statuses = self.run_cycle(winches, frame.as_ref())?;
            completed += 1;

            let report = CycleReport {
                cycle: completed - 1,
                elapsed_s: completed as f64 * self.period_ns as f64 * 1e-9,
                progress_percent: progress_percent(completed as usize, total),
                statuses,
            };

            if on_cycle(report).is_break() {
                log_debug!("run stopped after {} of {} cycles", completed, total);
                break;
            }
        }

        Ok(completed)
    }

    fn check(&self, winch_count: usize, setpoints: &[WinchCommand]) -> Result<()> {
        if winch_count > MAX_WINCHES {
            return Err(Error::Command(CommandError::TooManyWinches(winch_count)));
        }

        if setpoints.len() != winch_count {
            return Err(Error::Command(CommandError::SetpointCount {
                expected: winch_count,
                actual: setpoints.len(),
            }));
        }

        if let Some(winch) = setpoints.iter().position(|s| !self.mode.accepts(s)) {
            return Err(Error::Command(CommandError::ModeMismatch {
                mode: self.mode,
                winch,
            }));
        }

        Ok(())
    }
}

fn progress_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    (completed.min(total) * 100 / total) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::Meters;
    use crate::config::WinchParams;
    use crate::drive::{DriveCommand, SimulatedDrive};
    use embedded_hal_mock::eh1::delay::NoopDelay;

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, 4), 0);
        assert_eq!(progress_percent(1, 4), 25);
        assert_eq!(progress_percent(4, 4), 100);
        assert_eq!(progress_percent(0, 0), 100);
    }

    #[test]
    fn test_rejected_cycle_sends_nothing() {
        let params = WinchParams::from_factor(Meters(0.001));
        let mut winches = [
            Winch::new(0, 1, &params, SimulatedDrive::new()),
            Winch::new(1, 2, &params, SimulatedDrive::new()),
        ];
        let mut control = ControlLoop::with_mode(NoopDelay::new(), 1_000_000, ControlMode::CableLength);

        let result = control.run_cycle(
            &mut winches,
            &[WinchCommand::Length(Meters(1.0)), WinchCommand::Velocity(3)],
        );

        assert!(matches!(
            result,
            Err(Error::Command(CommandError::ModeMismatch { winch: 1, .. }))
        ));
        assert!(winches.iter().all(|w| w.drive().command_count() == 0));
        assert_eq!(control.cycles(), 0);
    }

    #[test]
    fn test_cycle_polls_then_dispatches() {
        let params = WinchParams::from_factor(Meters(0.001));
        let mut winches = [Winch::new(0, 1, &params, SimulatedDrive::at(100))];
        let mut control = ControlLoop::with_mode(NoopDelay::new(), 1_000_000, ControlMode::MotorPosition);

        let statuses = control
            .run_cycle(&mut winches, &[WinchCommand::Position(crate::Counts(900))])
            .unwrap();

        assert_eq!(statuses[0].motor_position.0, 100);
        assert_eq!(
            winches[0].drive().last_command(),
            Some(DriveCommand::Position(900))
        );
        assert_eq!(control.cycles(), 1);
    }
}

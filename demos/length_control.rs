//! Cable length control example.
//!
//! Drives two winches through a short cable-length trajectory with a fixed
//! period control loop, printing the progress reports.
//!
//! This example uses the crate's simulated drive instead of real hardware.

use core::ops::ControlFlow;

use cable_winch::{
    ControlLoop, ControlMode, Meters, SimulatedDrive, Winch, WinchCommand, WinchParams,
};

/// Delay provider backed by the OS sleep.
struct StdDelay;

impl embedded_hal::delay::DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(ns as u64));
    }
}

fn main() -> Result<(), cable_winch::Error> {
    println!("=== Cable Length Control Example ===\n");

    // 0.1 mm of cable per count
    let params = WinchParams::from_factor(Meters(0.0001));

    let mut winches = [
        Winch::new(0, 1, &params, SimulatedDrive::at(0)),
        Winch::new(1, 2, &params, SimulatedDrive::at(5_000)),
    ];
    winches[0].home(Meters(1.0));
    winches[1].home(Meters(1.5));

    let mut control = ControlLoop::with_mode(StdDelay, 10_000_000, ControlMode::CableLength);
    control.engage(&mut winches)?;

    // Shorten one cable while paying out the other
    let frames: Vec<[WinchCommand; 2]> = (1..=10)
        .map(|i| {
            let s = i as f64 * 0.01;
            [
                WinchCommand::Length(Meters(1.0 + s)),
                WinchCommand::Length(Meters(1.5 - s)),
            ]
        })
        .collect();

    let cycles = control.run(&mut winches, &frames, |report| {
        let lengths: Vec<String> = report
            .statuses
            .iter()
            .map(|s| format!("{:.4} m", s.cable_length.0))
            .collect();
        println!(
            "[{:>3}%] t = {:.2} s  {}",
            report.progress_percent,
            report.elapsed_s,
            lengths.join("  ")
        );
        ControlFlow::Continue(())
    })?;

    for winch in winches.iter_mut() {
        let status = winch.status();
        println!(
            "winch {}: {:.4} m at {} counts",
            status.id, status.cable_length.0, status.motor_position.0
        );
    }
    println!("\n{} cycles, pausable: {}", cycles, control.is_pausable());

    Ok(())
}

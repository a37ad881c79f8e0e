//! Homing example.
//!
//! Builds the winches of a small robot from TOML, homes them against their
//! configured nominal cable lengths and shows how length readings follow the
//! encoders afterwards.
//!
//! This example uses the crate's simulated drive instead of real hardware.

use cable_winch::{parse_config, SimulatedDrive, WinchSystem};

const ROBOT: &str = r#"
[params.grab]
counts_per_revolution = 1048576
drum_radius_m = 0.035
drum_pitch_m = 0.007
gear_ratio = 5.0

[winches.front_left]
id = 0
slave_position = 1
params = "grab"
home_length_m = 1.20

[winches.front_right]
id = 1
slave_position = 2
params = "grab"
home_length_m = 1.35
"#;

fn main() -> Result<(), cable_winch::Error> {
    println!("=== Winch Homing Example ===\n");

    let system = WinchSystem::from_config(parse_config(ROBOT)?);

    for name in system.winch_names() {
        let mut winch = system.build_winch(name, SimulatedDrive::at(250_000))?;

        let before = winch.status();
        println!(
            "{name}: uncalibrated, {} counts -> {:.4} m (not meaningful)",
            before.motor_position.0, before.cable_length.0
        );

        let home = system.home_length(name).unwrap_or_default();
        winch.home(home);

        // Pay out one motor revolution
        let one_rev = winch.params().counts_per_revolution as i32;
        winch.drive_mut().jog_to(250_000 + one_rev);

        let after = winch.status();
        println!(
            "{name}: homed at {:.3} m, after one motor revolution {:.4} m (+{:.2} mm)",
            home.0,
            after.cable_length.0,
            (after.cable_length - home).to_millimeters()
        );
    }

    Ok(())
}

//! Winch configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::units::Meters;

/// One winch of the robot, as declared in configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WinchConfig {
    /// Logical actuator index.
    pub id: u8,

    /// Physical bus address of the servo drive.
    pub slave_position: u8,

    /// Name of the parameter set this winch uses (must match a `[params.*]` table).
    pub params: String<32>,

    /// Nominal cable length at the homing pose, if known in advance.
    #[serde(default, rename = "home_length_m")]
    pub home_length: Option<Meters>,
}

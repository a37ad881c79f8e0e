//! Winch parameter sets from TOML.

use core::f64::consts::PI;

use serde::Deserialize;

use super::units::{Counts, Meters, MetersPerSec};

/// Static physical constants of one winch type.
///
/// Winches built on identical hardware share a single parameter set. The only
/// quantity the winch model consumes is [`WinchParams::counts_to_length_factor`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WinchParams {
    /// Encoder counts per motor shaft revolution.
    pub counts_per_revolution: u32,

    /// Drum radius at the cable winding, in meters.
    #[serde(rename = "drum_radius_m")]
    pub drum_radius: Meters,

    /// Axial pitch of the drum groove, in meters per drum revolution.
    #[serde(default, rename = "drum_pitch_m")]
    pub drum_pitch: Meters,

    /// Gearbox reduction (motor revolutions per drum revolution).
    #[serde(default = "default_gear_ratio")]
    pub gear_ratio: f64,

    /// Positive motor counts shorten the cable instead of lengthening it.
    #[serde(default)]
    pub invert_direction: bool,

    /// Calibrated cable length per count, replacing the value derived from
    /// the drum geometry. The sign is taken as given.
    #[serde(default, rename = "length_per_count_m")]
    pub length_per_count: Option<Meters>,
}

fn default_gear_ratio() -> f64 {
    1.0
}

impl WinchParams {
    /// Create a parameter set from drum geometry.
    pub fn new(counts_per_revolution: u32, drum_radius: Meters, gear_ratio: f64) -> Self {
        Self {
            counts_per_revolution,
            drum_radius,
            drum_pitch: Meters::default(),
            gear_ratio,
            invert_direction: false,
            length_per_count: None,
        }
    }

    /// Create a parameter set from a known length-per-count factor.
    pub fn from_factor(length_per_count: Meters) -> Self {
        Self {
            counts_per_revolution: 1,
            drum_radius: Meters::default(),
            drum_pitch: Meters::default(),
            gear_ratio: 1.0,
            invert_direction: false,
            length_per_count: Some(length_per_count),
        }
    }

    /// Set the drum groove pitch.
    pub fn with_drum_pitch(mut self, pitch: Meters) -> Self {
        self.drum_pitch = pitch;
        self
    }

    /// Set direction inversion.
    pub fn with_inverted_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Cable length paid out per drum revolution.
    ///
    /// A helical groove unwinds the circumference and the pitch together.
    pub fn length_per_drum_revolution(&self) -> Meters {
        Meters(libm::hypot(2.0 * PI * self.drum_radius.0, self.drum_pitch.0))
    }

    /// Meters of cable per encoder count.
    pub fn counts_to_length_factor(&self) -> f64 {
        if let Some(factor) = self.length_per_count {
            return factor.0;
        }
        let counts_per_drum_revolution = self.counts_per_revolution as f64 * self.gear_ratio;
        let factor = self.length_per_drum_revolution().0 / counts_per_drum_revolution;
        if self.invert_direction {
            -factor
        } else {
            factor
        }
    }

    /// Convert a count displacement to a cable length displacement.
    #[inline]
    pub fn counts_to_length(&self, counts: Counts) -> Meters {
        Meters(counts.0 as f64 * self.counts_to_length_factor())
    }

    /// Convert a cable length displacement to counts, truncating toward zero.
    ///
    /// Saturates at the `i32` range.
    #[inline]
    pub fn length_to_counts(&self, length: Meters) -> Counts {
        Counts(libm::trunc(length.0 / self.counts_to_length_factor()) as i32)
    }

    /// Convert a cable speed to a motor speed in counts per second, truncating toward zero.
    #[inline]
    pub fn speed_to_counts(&self, speed: MetersPerSec) -> i32 {
        libm::trunc(speed.0 / self.counts_to_length_factor()) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_from_geometry() {
        // 2*pi*0.05 m per drum rev, 4096 * 10 counts per drum rev
        let params = WinchParams::new(4096, Meters(0.05), 10.0);
        let expected = 2.0 * PI * 0.05 / 40960.0;
        assert!((params.counts_to_length_factor() - expected).abs() < 1e-15);
    }

    #[test]
    fn test_pitch_lengthens_revolution() {
        let flat = WinchParams::new(1000, Meters(0.03), 1.0);
        let grooved = flat.clone().with_drum_pitch(Meters(0.005));
        assert!(grooved.length_per_drum_revolution() > flat.length_per_drum_revolution());
    }

    #[test]
    fn test_inverted_direction_negates_factor() {
        let params = WinchParams::new(1000, Meters(0.03), 1.0);
        let inverted = params.clone().with_inverted_direction(true);
        assert_eq!(
            inverted.counts_to_length_factor(),
            -params.counts_to_length_factor()
        );
    }

    #[test]
    fn test_override_wins() {
        let params = WinchParams::from_factor(Meters(0.001));
        assert_eq!(params.counts_to_length_factor(), 0.001);
        assert_eq!(params.length_to_counts(Meters(0.2505)), Counts(250));
        assert_eq!(params.length_to_counts(Meters(-0.2505)), Counts(-250));
    }

    #[test]
    fn test_speed_conversion_truncates() {
        let params = WinchParams::from_factor(Meters(0.001));
        assert_eq!(params.speed_to_counts(MetersPerSec(0.0129)), 12);
        assert_eq!(params.speed_to_counts(MetersPerSec(-0.0129)), -12);
    }
}

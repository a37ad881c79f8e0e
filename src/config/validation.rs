//! Configuration validation.

use heapless::FnvIndexSet;

use crate::error::{ConfigError, Error, Result};

use super::system::MAX_WINCHES;
use super::{RobotConfig, WinchParams};

/// Validate a robot configuration.
///
/// Checks:
/// - Parameter sets describe a usable counts-to-length factor
/// - Every winch references an existing parameter set
/// - Winch ids and slave positions are unique
pub fn validate_config(config: &RobotConfig) -> Result<()> {
    for (_, params) in config.params.iter() {
        validate_params(params)?;
    }

    let mut ids: FnvIndexSet<u8, MAX_WINCHES> = FnvIndexSet::new();
    let mut slaves: FnvIndexSet<u8, MAX_WINCHES> = FnvIndexSet::new();

    for (name, winch) in config.winches.iter() {
        if config.param_set(winch.params.as_str()).is_none() {
            return Err(Error::Config(ConfigError::ParamSetNotFound {
                winch: name.clone(),
                params: winch.params.clone(),
            }));
        }

        // Sets are sized like the winch map, so insertion cannot overflow
        if !ids.insert(winch.id).unwrap_or(false) {
            return Err(Error::Config(ConfigError::DuplicateWinchId(winch.id)));
        }
        if !slaves.insert(winch.slave_position).unwrap_or(false) {
            return Err(Error::Config(ConfigError::DuplicateSlavePosition(
                winch.slave_position,
            )));
        }
    }

    Ok(())
}

/// Validate a single parameter set.
pub fn validate_params(params: &WinchParams) -> Result<()> {
    if let Some(factor) = params.length_per_count {
        if !factor.0.is_finite() || factor.0 == 0.0 {
            return Err(Error::Config(ConfigError::InvalidLengthPerCount(factor.0)));
        }
        // Geometry is unused when the factor is given directly
        return Ok(());
    }

    if params.counts_per_revolution == 0 {
        return Err(Error::Config(ConfigError::InvalidCountsPerRevolution(
            params.counts_per_revolution,
        )));
    }

    if !params.drum_radius.0.is_finite() || params.drum_radius.0 <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidDrumRadius(params.drum_radius.0)));
    }

    if !params.drum_pitch.0.is_finite() || params.drum_pitch.0 < 0.0 {
        return Err(Error::Config(ConfigError::InvalidDrumPitch(params.drum_pitch.0)));
    }

    if !params.gear_ratio.is_finite() || params.gear_ratio <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidGearRatio(params.gear_ratio)));
    }

    // Finite inputs can still over- or underflow the derived factor
    let factor = params.counts_to_length_factor();
    if !factor.is_finite() || factor == 0.0 {
        return Err(Error::Config(ConfigError::InvalidLengthPerCount(factor)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::Meters;

    #[test]
    fn test_invalid_gear_ratio() {
        let params = WinchParams::new(4096, Meters(0.05), -1.0);

        let result = validate_params(&params);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidGearRatio(_)))
        ));
    }

    #[test]
    fn test_nan_radius_rejected() {
        let params = WinchParams::new(4096, Meters(f64::NAN), 1.0);
        assert!(matches!(
            validate_params(&params),
            Err(Error::Config(ConfigError::InvalidDrumRadius(_)))
        ));
    }

    #[test]
    fn test_infinite_geometry_rejected() {
        let params = WinchParams::new(4096, Meters(f64::INFINITY), 1.0);
        assert!(matches!(
            validate_params(&params),
            Err(Error::Config(ConfigError::InvalidDrumRadius(_)))
        ));

        let params =
            WinchParams::new(4096, Meters(0.05), 1.0).with_drum_pitch(Meters(f64::INFINITY));
        assert!(matches!(
            validate_params(&params),
            Err(Error::Config(ConfigError::InvalidDrumPitch(_)))
        ));

        let params = WinchParams::new(4096, Meters(0.05), f64::INFINITY);
        assert!(matches!(
            validate_params(&params),
            Err(Error::Config(ConfigError::InvalidGearRatio(_)))
        ));
    }

    #[test]
    fn test_underflowing_factor_rejected() {
        let params = WinchParams::new(u32::MAX, Meters(1e-300), 1e300);
        assert!(matches!(
            validate_params(&params),
            Err(Error::Config(ConfigError::InvalidLengthPerCount(_)))
        ));
    }

    #[test]
    fn test_negative_override_is_valid() {
        // Sign of the factor is a wiring property, not an error
        let params = WinchParams::from_factor(Meters(-0.001));
        assert!(validate_params(&params).is_ok());

        let params = WinchParams::from_factor(Meters(0.0));
        assert!(matches!(
            validate_params(&params),
            Err(Error::Config(ConfigError::InvalidLengthPerCount(_)))
        ));
    }
}

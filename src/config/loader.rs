//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::RobotConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
///
/// ```rust,ignore
/// use cable_winch::load_config;
///
/// let config = load_config("robot.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RobotConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = truncated(&e.to_string());
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<RobotConfig> {
    let config: RobotConfig = toml::from_str(content)
        .map_err(|e| Error::Config(ConfigError::ParseError(truncated(e.message()))))?;

    super::validation::validate_config(&config)?;

    log_debug!(
        "loaded {} winches, {} parameter sets",
        config.winches.len(),
        config.params.len()
    );

    Ok(config)
}

/// Keep as much of a message as fits the error payload.
fn truncated(msg: &str) -> heapless::String<128> {
    let mut out = heapless::String::new();
    for c in msg.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[params.grab]
counts_per_revolution = 1048576
drum_radius_m = 0.035

[winches.w0]
id = 0
slave_position = 1
params = "grab"
"#;

        let config = parse_config(toml).unwrap();
        assert!(config.winch("w0").is_some());
        assert!(config.params_for("w0").is_some());
    }

    #[test]
    fn test_parse_unknown_param_set() {
        let toml = r#"
[params.grab]
counts_per_revolution = 1048576
drum_radius_m = 0.035

[winches.w0]
id = 0
slave_position = 1
params = "other"
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::ParamSetNotFound { .. }))
        ));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let result = parse_config("[params.grab]\ncounts_per_revolution = \"many\"\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn test_truncated_long_message() {
        let long = "x".repeat(300);
        assert_eq!(truncated(&long).len(), 128);
    }
}

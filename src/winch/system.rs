//! Winch system facade for multi-winch configuration.
//!
//! Provides a high-level API for building the winches of one robot from a
//! single configuration.

use heapless::String;

use crate::config::{RobotConfig, WinchConfig, WinchParams};
use crate::drive::ServoDrive;
use crate::error::{ConfigError, Error, Result};

use super::builder::WinchBuilder;
use super::unit::Winch;

/// A facade for building winches from configuration.
///
/// The system owns the configuration; winches it builds borrow their
/// parameter set from it, so winches of identical hardware share one
/// immutable [`WinchParams`].
///
/// # Example
///
/// ```rust,ignore
/// use cable_winch::{WinchSystem, load_config};
///
/// let system = WinchSystem::from_config(load_config("robot.toml")?);
///
/// let mut w0 = system.build_winch("w0", drive0)?;
/// let mut w1 = system.build_winch("w1", drive1)?;
///
/// w0.home(system.home_length("w0").unwrap_or_default());
/// ```
#[derive(Debug, Clone)]
pub struct WinchSystem {
    /// The robot configuration.
    config: RobotConfig,
}

impl WinchSystem {
    /// Create a new winch system from configuration.
    ///
    /// The configuration is expected to be validated already, as done by
    /// [`crate::config::parse_config`].
    pub fn from_config(config: RobotConfig) -> Self {
        Self { config }
    }

    /// Get the robot configuration.
    pub fn config(&self) -> &RobotConfig {
        &self.config
    }

    /// Get a winch configuration by name.
    pub fn winch_config(&self, name: &str) -> Option<&WinchConfig> {
        self.config.winch(name)
    }

    /// Get the parameter set a winch uses.
    pub fn params_for(&self, name: &str) -> Option<&WinchParams> {
        self.config.params_for(name)
    }

    /// Get the configured nominal home length of a winch.
    pub fn home_length(&self, name: &str) -> Option<crate::config::Meters> {
        self.config.winch(name).and_then(|w| w.home_length)
    }

    /// Check if a winch name exists in the configuration.
    pub fn has_winch(&self, name: &str) -> bool {
        self.config.winch(name).is_some()
    }

    /// List all configured winch names.
    pub fn winch_names(&self) -> impl Iterator<Item = &str> {
        self.config.winch_names()
    }

    /// Number of configured winches.
    pub fn len(&self) -> usize {
        self.config.winches.len()
    }

    /// Check if no winches are configured.
    pub fn is_empty(&self) -> bool {
        self.config.winches.is_empty()
    }

    /// Build a winch from configuration, driving it through `drive`.
    ///
    /// # Errors
    ///
    /// Returns an error if the winch name or its parameter set doesn't exist.
    pub fn build_winch<D>(&self, name: &str, drive: D) -> Result<Winch<'_, D>>
    where
        D: ServoDrive,
    {
        let winch_config = self.config.winch(name).ok_or_else(|| {
            Error::Config(ConfigError::WinchNotFound(
                String::try_from(name).unwrap_or_default(),
            ))
        })?;

        let params = self
            .config
            .param_set(winch_config.params.as_str())
            .ok_or_else(|| {
                Error::Config(ConfigError::ParamSetNotFound {
                    winch: String::try_from(name).unwrap_or_default(),
                    params: winch_config.params.clone(),
                })
            })?;

        log_debug!(
            "building winch {} (slave {})",
            winch_config.id,
            winch_config.slave_position
        );

        WinchBuilder::new()
            .from_winch_config(winch_config)
            .params(params)
            .drive(drive)
            .build()
    }
}

//! Builder pattern for Winch.

use crate::config::{WinchConfig, WinchParams};
use crate::drive::ServoDrive;
use crate::error::{ConfigError, Error, Result};

use super::unit::Winch;

/// Builder for creating Winch instances.
pub struct WinchBuilder<'p, D>
where
    D: ServoDrive,
{
    id: u8,
    slave_position: u8,
    params: Option<&'p WinchParams>,
    drive: Option<D>,
}

impl<'p, D> Default for WinchBuilder<'p, D>
where
    D: ServoDrive,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'p, D> WinchBuilder<'p, D>
where
    D: ServoDrive,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            id: 0,
            slave_position: 0,
            params: None,
            drive: None,
        }
    }

    /// Set the logical actuator index.
    pub fn id(mut self, id: u8) -> Self {
        self.id = id;
        self
    }

    /// Set the drive bus address.
    pub fn slave_position(mut self, slave_position: u8) -> Self {
        self.slave_position = slave_position;
        self
    }

    /// Set the shared parameter set.
    pub fn params(mut self, params: &'p WinchParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Set the servo drive handle.
    pub fn drive(mut self, drive: D) -> Self {
        self.drive = Some(drive);
        self
    }

    /// Configure id and bus address from a WinchConfig.
    ///
    /// The parameter set is resolved separately, see
    /// [`crate::RobotConfig::params_for`].
    pub fn from_winch_config(mut self, config: &WinchConfig) -> Self {
        self.id = config.id;
        self.slave_position = config.slave_position;
        self
    }

    /// Build the Winch.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter set or the drive is missing.
    pub fn build(self) -> Result<Winch<'p, D>> {
        let params = self
            .params
            .ok_or(Error::Config(ConfigError::MissingField("params")))?;

        let drive = self
            .drive
            .ok_or(Error::Config(ConfigError::MissingField("drive")))?;

        Ok(Winch::new(self.id, self.slave_position, params, drive))
    }
}

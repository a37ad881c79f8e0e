//! Robot configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::params::WinchParams;
use super::winch::WinchConfig;

/// Maximum number of distinct parameter sets.
pub const MAX_PARAM_SETS: usize = 8;

/// Maximum number of winches on one robot.
pub const MAX_WINCHES: usize = 16;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct RobotConfig {
    /// Named winch parameter sets, shared by every winch that references them.
    pub params: FnvIndexMap<String<32>, WinchParams, MAX_PARAM_SETS>,

    /// Named winch configurations.
    pub winches: FnvIndexMap<String<32>, WinchConfig, MAX_WINCHES>,
}

impl RobotConfig {
    /// Get a parameter set by name.
    pub fn param_set(&self, name: &str) -> Option<&WinchParams> {
        self.params
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Get a winch configuration by name.
    pub fn winch(&self, name: &str) -> Option<&WinchConfig> {
        self.winches
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Get the parameter set referenced by a winch.
    pub fn params_for(&self, winch_name: &str) -> Option<&WinchParams> {
        self.winch(winch_name)
            .and_then(|w| self.param_set(w.params.as_str()))
    }

    /// List all winch names.
    pub fn winch_names(&self) -> impl Iterator<Item = &str> {
        self.winches.keys().map(|s| s.as_str())
    }

    /// List all parameter set names.
    pub fn param_set_names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(|s| s.as_str())
    }
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            params: FnvIndexMap::new(),
            winches: FnvIndexMap::new(),
        }
    }
}

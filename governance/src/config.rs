//! Governor configuration with TOML file support.

use crate::error::GovernanceError;
use crate::params::validate_params;
use ballot_types::{AccountId, GovernanceParams};
use ballot_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a governor deployment.
///
/// Can be loaded from a TOML file via [`GovernorConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernorConfig {
    /// Identity of the external executor: sole caller allowed to bind
    /// snapshots and change parameters.
    pub authority: AccountId,

    /// This governor's own identity, mixed into queue salts.
    pub identity: AccountId,

    /// Initial governance parameters.
    #[serde(default)]
    pub params: GovernanceParams,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl GovernorConfig {
    /// Config with default parameters and logging.
    pub fn new(authority: AccountId, identity: AccountId) -> Self {
        Self {
            authority,
            identity,
            params: GovernanceParams::default(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }

    pub fn with_params(mut self, params: GovernanceParams) -> Self {
        self.params = params;
        self
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, GovernanceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| GovernanceError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, GovernanceError> {
        toml::from_str(s).map_err(|e| GovernanceError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, GovernanceError> {
        toml::to_string_pretty(self).map_err(|e| GovernanceError::Config(e.to_string()))
    }

    /// Check initial parameters against the administration bounds.
    pub fn validate(&self) -> Result<(), GovernanceError> {
        validate_params(&self.params)
    }
}

// file: src/config/mod.rs
// version: 1.0.0
// guid: 7b2e9d41-5c3a-4f08-a6e1-0d9c4b3f7a25

//! Configuration module for the hydra agent
//!
//! Supplies executable paths and defaults for the `rac` and `ring` wrappers.

pub mod loader;

pub use loader::ConfigLoader;

use crate::error::{AgentError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level agent configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Cluster administration client settings
    pub rac: RacSettings,
    /// License administration client settings
    pub ring: RingSettings,
    /// Directory for scratch license files (defaults to the OS temp dir)
    pub temp_dir: Option<PathBuf>,
}

/// Settings for the `rac` cluster administration client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RacSettings {
    /// Path to the `rac` executable
    pub path: PathBuf,
    /// Address of the administration server (`host[:port]`), appended to every call
    pub server: Option<String>,
}

/// Settings for the `ring` license administration client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingSettings {
    /// Path to the `ring` executable
    pub path: PathBuf,
    /// Default license directory passed as `--path`
    pub license_path: Option<String>,
}

impl Default for RacSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("rac"),
            server: None,
        }
    }
}

impl Default for RingSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("ring"),
            license_path: None,
        }
    }
}

impl AgentConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.rac.path.as_os_str().is_empty() {
            return Err(AgentError::config("rac executable path cannot be empty"));
        }

        if self.ring.path.as_os_str().is_empty() {
            return Err(AgentError::config("ring executable path cannot be empty"));
        }

        if let Some(server) = &self.rac.server {
            if server.trim().is_empty() {
                return Err(AgentError::config("rac server address cannot be blank"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve_through_path() {
        let config = AgentConfig::default();

        assert_eq!(config.rac.path, PathBuf::from("rac"));
        assert_eq!(config.ring.path, PathBuf::from("ring"));
        assert!(config.rac.server.is_none());
        assert!(config.temp_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let mut config = AgentConfig::default();
        config.ring.path = PathBuf::new();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ring executable path"));
    }

    #[test]
    fn test_validate_rejects_blank_server() {
        let mut config = AgentConfig::default();
        config.rac.server = Some("  ".to_string());

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: AgentConfig = serde_yaml::from_str("ring:\n  license_path: /srv/lic\n").unwrap();

        assert_eq!(config.ring.path, PathBuf::from("ring"));
        assert_eq!(config.ring.license_path.as_deref(), Some("/srv/lic"));
        assert_eq!(config.rac, RacSettings::default());
    }
}

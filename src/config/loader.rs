// file: src/config/loader.rs
// version: 1.0.0
// guid: c41d7e8a-2f95-4b6c-8e03-9a7b5d1f2e64

//! Configuration file discovery, loading and environment variable substitution

use super::AgentConfig;
use crate::error::{AgentError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV: &str = "HYDRA_AGENT_CONFIG";

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Load configuration from the first source found, then apply environment overrides
    ///
    /// Sources are tried in order: `explicit`, the file named by
    /// `HYDRA_AGENT_CONFIG`, `<config dir>/hydra-agent/config.yaml`. When none
    /// exists the built-in defaults are used.
    pub fn load(&self, explicit: Option<&Path>) -> Result<AgentConfig> {
        let config = match self.locate(explicit)? {
            Some(path) => {
                info!("Loading configuration from: {}", path.display());
                self.load_file(&path)?
            }
            None => {
                debug!("No configuration file found, using defaults");
                AgentConfig::default()
            }
        };

        let config = self.apply_env_overrides(config);
        config.validate()?;

        debug!("Final configuration: {:#?}", config);
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<AgentConfig> {
        let content = fs::read_to_string(&path).map_err(|e| {
            AgentError::config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        self.parse(&content)
    }

    /// Parse configuration from YAML text
    pub fn parse(&self, content: &str) -> Result<AgentConfig> {
        let expanded = self.expand_env_vars(content)?;
        if expanded.trim().is_empty() {
            return Ok(AgentConfig::default());
        }

        let config: AgentConfig = serde_yaml::from_str(&expanded)?;
        config.validate()?;

        Ok(config)
    }

    fn locate(&self, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(AgentError::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Ok(Some(path.to_path_buf()));
        }

        if let Some(path) = self.env_vars.get(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if !path.exists() {
                return Err(AgentError::config(format!(
                    "Config file named by {} not found: {}",
                    CONFIG_ENV,
                    path.display()
                )));
            }
            return Ok(Some(path));
        }

        Ok(Self::user_config_path().filter(|path| path.exists()))
    }

    /// Get the user configuration file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hydra-agent").join("config.yaml"))
    }

    /// Expand environment variables in configuration content
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| AgentError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut result = content.to_string();
        let mut missing_vars = Vec::new();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];

            if let Some(value) = self.env_vars.get(var_name) {
                result = result.replace(placeholder, value);
            } else if !missing_vars.iter().any(|v| v == var_name) {
                missing_vars.push(var_name.to_string());
            }
        }

        if !missing_vars.is_empty() {
            return Err(AgentError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(result)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&self, mut config: AgentConfig) -> AgentConfig {
        if let Some(path) = self.non_empty_var("HYDRA_RAC_PATH") {
            config.rac.path = PathBuf::from(path);
        }

        if let Some(server) = self.non_empty_var("HYDRA_RAC_SERVER") {
            config.rac.server = Some(server.to_string());
        }

        if let Some(path) = self.non_empty_var("HYDRA_RING_PATH") {
            config.ring.path = PathBuf::from(path);
        }

        if let Some(path) = self.non_empty_var("HYDRA_LICENSE_PATH") {
            config.ring.license_path = Some(path.to_string());
        }

        config
    }

    fn non_empty_var(&self, key: &str) -> Option<&str> {
        self.env_vars
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    /// Set environment variable for substitution and overrides
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

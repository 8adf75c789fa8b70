// file: src/ring/license.rs
// version: 1.0.0
// guid: a9c6f0b2-3e71-4d58-9b4a-e0d2f8c57a13

//! Wrapper around `ring license` commands

use super::ActivationRequest;
use crate::config::{AgentConfig, RingSettings};
use crate::error::{AgentError, Result};
use crate::logging::with_operation_span;
use crate::process::{ProcessInvoker, ScratchFile};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{info, warn};

/// License operations on the local license store
///
/// Every call spawns one `ring` process and blocks until it exits. License
/// payloads travel through a [`ScratchFile`] that is gone once the call returns.
#[derive(Debug, Clone)]
pub struct LicenseManager {
    invoker: ProcessInvoker,
    license_path: Option<String>,
    temp_dir: Option<PathBuf>,
}

impl LicenseManager {
    /// Create a manager for the given `ring` settings
    pub fn new(settings: RingSettings) -> Self {
        Self {
            invoker: ProcessInvoker::new(settings.path),
            license_path: settings.license_path,
            temp_dir: None,
        }
    }

    /// Create a manager from the agent configuration
    pub fn from_config(config: &AgentConfig) -> Self {
        Self::new(config.ring.clone()).with_temp_dir(config.temp_dir.clone())
    }

    /// Place scratch files under `dir` instead of the OS temp directory
    pub fn with_temp_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.temp_dir = dir;
        self
    }

    /// Fetch a license file's raw contents
    pub fn get(&self, name: &str, path: Option<&str>) -> Result<Vec<u8>> {
        with_operation_span("license get", || {
            let name = license_name(name)?;
            let scratch = ScratchFile::reserve(self.temp_dir.as_deref())?;

            let mut args = command(&["get", "--name", name, "--license"]);
            args.push(scratch.path().as_os_str().to_owned());
            self.invoker.run(&self.with_path(args, path))?;

            let license = scratch.read()?;
            scratch.close()?;

            info!("Retrieved license {} ({} bytes)", name, license.len());
            Ok(license)
        })
    }

    /// Install a license file
    pub fn put(&self, license: &[u8], path: Option<&str>) -> Result<()> {
        with_operation_span("license put", || {
            let scratch = ScratchFile::with_contents(self.temp_dir.as_deref(), license)?;

            let mut args = command(&["put", "--license"]);
            args.push(scratch.path().as_os_str().to_owned());
            self.invoker.run(&self.with_path(args, path))?;

            scratch.close()?;

            info!("Installed license ({} bytes)", license.len());
            Ok(())
        })
    }

    /// Describe a license, returning the tool's text unparsed
    pub fn info(&self, name: &str, path: Option<&str>) -> Result<String> {
        with_operation_span("license info", || {
            let name = license_name(name)?;
            let args = command(&["info", "--name", name]);
            self.invoker.run(&self.with_path(args, path))
        })
    }

    /// Names of the installed licenses
    pub fn list(&self, path: Option<&str>) -> Result<Vec<String>> {
        with_operation_span("license list", || {
            let output = self.invoker.run(&self.with_path(command(&["list"]), path))?;
            Ok(output.split_whitespace().map(str::to_string).collect())
        })
    }

    /// Remove every copy of a license
    ///
    /// Removing an absent license reports whatever `ring` reports for it.
    pub fn remove(&self, name: &str, path: Option<&str>) -> Result<()> {
        with_operation_span("license remove", || {
            let name = license_name(name)?;
            let args = command(&["remove", "--name", name, "--all"]);
            self.invoker.run(&self.with_path(args, path))?;

            info!("Removed license {}", name);
            Ok(())
        })
    }

    /// Check that a license is valid on this machine
    pub fn validate(&self, name: &str, path: Option<&str>) -> Result<()> {
        with_operation_span("license validate", || {
            let name = license_name(name)?;
            let args = command(&["validate", "--name", name]);
            self.invoker.run(&self.with_path(args, path))?;
            Ok(())
        })
    }

    /// Register a license with the licensing center
    ///
    /// Not supported: activation is an interactive exchange with the licensing
    /// center and always fails with [`AgentError::NotImplemented`] without
    /// starting `ring`.
    pub fn activate(&self, request: &ActivationRequest) -> Result<()> {
        warn!(
            "License activation requested for serial {:?} but is not supported",
            request.serial
        );
        Err(AgentError::not_implemented(
            "license activation through the licensing center",
        ))
    }

    fn with_path(&self, mut args: Vec<OsString>, path: Option<&str>) -> Vec<OsString> {
        let path = path
            .or(self.license_path.as_deref())
            .map(str::trim)
            .filter(|p| !p.is_empty());

        if let Some(path) = path {
            args.push("--path".into());
            args.push(path.into());
        }
        args
    }
}

fn command(parts: &[&str]) -> Vec<OsString> {
    std::iter::once("license")
        .chain(parts.iter().copied())
        .map(OsString::from)
        .collect()
}

fn license_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AgentError::validation("license name cannot be empty"));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(license_path: Option<&str>) -> LicenseManager {
        LicenseManager::new(RingSettings {
            path: "ring".into(),
            license_path: license_path.map(str::to_string),
        })
    }

    #[test]
    fn test_command_prefix() {
        assert_eq!(command(&["list"]), ["license", "list"]);
    }

    #[test]
    fn test_path_is_trimmed_and_appended() {
        let args = manager(None).with_path(command(&["list"]), Some("  /var/1C/licenses "));

        assert_eq!(args, ["license", "list", "--path", "/var/1C/licenses"]);
    }

    #[test]
    fn test_blank_path_is_omitted() {
        let args = manager(Some("/default")).with_path(command(&["list"]), Some("   "));

        assert_eq!(args, ["license", "list"]);
    }

    #[test]
    fn test_configured_path_is_the_fallback() {
        let args = manager(Some("/default")).with_path(command(&["list"]), None);

        assert_eq!(args, ["license", "list", "--path", "/default"]);
    }

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(license_name("  lic-a.lic\n").unwrap(), "lic-a.lic");
    }

    #[test]
    fn test_empty_name_rejected_before_spawning() {
        let manager = LicenseManager::new(RingSettings {
            path: "/nonexistent/ring".into(),
            license_path: None,
        });

        for result in [
            manager.info(" ", None).map(|_| ()),
            manager.remove("", None),
            manager.validate("\t", None),
            manager.get("", None).map(|_| ()),
        ] {
            assert!(matches!(result, Err(AgentError::Validation(_))));
        }
    }

    #[test]
    fn test_activate_is_not_implemented() {
        let result = manager(None).activate(&ActivationRequest::default());

        assert!(matches!(result, Err(AgentError::NotImplemented(_))));
    }
}

// file: src/cli/commands.rs
// version: 1.0.0
// guid: b6e1f9a3-4d27-4c08-9f5b-e3a0d7c28164

//! Command implementations for the CLI

use super::args::{ClusterCommands, LicenseCommands};
use crate::{
    config::AgentConfig,
    error::AgentError,
    rac::ClusterManager,
    ring::{ActivationRequest, LicenseManager},
    Result,
};
use std::fs;
use std::path::Path;
use tracing::info;

/// Run a `cluster` subcommand
pub fn cluster_command(config: &AgentConfig, command: ClusterCommands) -> Result<()> {
    match command {
        ClusterCommands::List { json } => list_clusters_command(config, json),
    }
}

/// Run a `license` subcommand
pub fn license_command(config: &AgentConfig, command: LicenseCommands) -> Result<()> {
    let manager = LicenseManager::from_config(config);

    match command {
        LicenseCommands::List { path } => {
            for license in manager.list(path.path.as_deref())? {
                println!("{}", license);
            }
        }
        LicenseCommands::Info { name, path } => {
            print!("{}", manager.info(&name, path.path.as_deref())?);
        }
        LicenseCommands::Get { name, output, path } => {
            let license = manager.get(&name, path.path.as_deref())?;
            fs::write(&output, &license).map_err(|e| AgentError::filesystem(&output, e))?;
            info!("License {} written to {}", name.trim(), output.display());
        }
        LicenseCommands::Put { file, path } => {
            let license = fs::read(&file).map_err(|e| AgentError::filesystem(&file, e))?;
            manager.put(&license, path.path.as_deref())?;
        }
        LicenseCommands::Remove { name, path } => {
            manager.remove(&name, path.path.as_deref())?;
        }
        LicenseCommands::Validate { name, path } => {
            manager.validate(&name, path.path.as_deref())?;
            println!("License {} is valid", name.trim());
        }
        LicenseCommands::Activate { request } => {
            let request = match request {
                Some(path) => {
                    let request = load_activation_request(&path)?;
                    let missing = request.missing_fields();
                    if !missing.is_empty() {
                        return Err(AgentError::validation(format!(
                            "Activation request {} is missing: {}",
                            path.display(),
                            missing.join(", ")
                        )));
                    }
                    request
                }
                None => ActivationRequest::default(),
            };
            manager.activate(&request)?;
        }
    }

    Ok(())
}

/// List clusters as a table or as JSON
pub fn list_clusters_command(config: &AgentConfig, json_output: bool) -> Result<()> {
    let clusters = ClusterManager::from_config(config).list()?;

    if json_output {
        let json = serde_json::to_string_pretty(&clusters)?;
        println!("{}", json);
        return Ok(());
    }

    if clusters.is_empty() {
        info!("No clusters found");
        return Ok(());
    }

    println!("{:<36} {:<24} {:<6} {:<30}", "ID", "Host", "Port", "Name");
    println!("{:-<99}", "");
    for cluster in &clusters {
        println!(
            "{:<36} {:<24} {:<6} {:<30}",
            cluster.id, cluster.host, cluster.port, cluster.name
        );
    }

    Ok(())
}

/// Check that the configured binaries resolve to executables
pub fn check_prerequisites_command(config: &AgentConfig) -> Result<()> {
    let mut missing = Vec::new();

    for (tool, path) in [("rac", &config.rac.path), ("ring", &config.ring.path)] {
        match which::which(path) {
            Ok(resolved) => println!("{:<5} {}", tool, resolved.display()),
            Err(e) => {
                println!("{:<5} not found ({}): {}", tool, path.display(), e);
                missing.push(tool);
            }
        }
    }

    if !missing.is_empty() {
        return Err(AgentError::validation(format!(
            "Missing prerequisites: {}",
            missing.join(", ")
        )));
    }

    info!("All prerequisites satisfied");
    Ok(())
}

fn load_activation_request(path: &Path) -> Result<ActivationRequest> {
    let content = fs::read_to_string(path).map_err(|e| AgentError::filesystem(path, e))?;
    Ok(serde_yaml::from_str(&content)?)
}

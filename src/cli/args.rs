// file: src/cli/args.rs
// version: 1.0.0
// guid: 7e0d3b48-a1c6-4f95-b2d8-5c4e9f1a7032

//! Command line argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hydra-agent")]
#[command(about = "Cluster and license administration through rac and ring")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to $HYDRA_AGENT_CONFIG or the user config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cluster operations through rac
    #[command(subcommand)]
    Cluster(ClusterCommands),

    /// License operations through ring
    #[command(subcommand)]
    License(LicenseCommands),

    /// Check that the configured rac and ring binaries can be found
    CheckPrereqs,
}

#[derive(Subcommand, Debug)]
pub enum ClusterCommands {
    /// List clusters on the administration server
    List {
        #[arg(short, long)]
        json: bool,
    },
}

/// License directory option shared by license subcommands
#[derive(Args, Debug, Clone, Default)]
pub struct LicensePath {
    /// Path to the license files
    #[arg(short, long)]
    pub path: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum LicenseCommands {
    /// List installed licenses
    List {
        #[command(flatten)]
        path: LicensePath,
    },

    /// Show license details
    Info {
        #[arg(short, long)]
        name: String,

        #[command(flatten)]
        path: LicensePath,
    },

    /// Save a license file
    Get {
        #[arg(short, long)]
        name: String,

        #[arg(short, long, help = "Where to write the license file")]
        output: PathBuf,

        #[command(flatten)]
        path: LicensePath,
    },

    /// Install a license file
    Put {
        #[arg(short, long, help = "License file to install")]
        file: PathBuf,

        #[command(flatten)]
        path: LicensePath,
    },

    /// Remove a license
    Remove {
        #[arg(short, long)]
        name: String,

        #[command(flatten)]
        path: LicensePath,
    },

    /// Validate a license
    Validate {
        #[arg(short, long)]
        name: String,

        #[command(flatten)]
        path: LicensePath,
    },

    /// Activate a license through the licensing center (not supported)
    Activate {
        #[arg(long, help = "YAML file with registration data, checked for mandatory fields")]
        request: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_license_get() {
        let cli = Cli::parse_from([
            "hydra-agent",
            "license",
            "get",
            "--name",
            "lic-a.lic",
            "--output",
            "/tmp/out.lic",
            "--path",
            "/var/1C/licenses",
        ]);

        match cli.command {
            Commands::License(LicenseCommands::Get { name, output, path }) => {
                assert_eq!(name, "lic-a.lic");
                assert_eq!(output, PathBuf::from("/tmp/out.lic"));
                assert_eq!(path.path.as_deref(), Some("/var/1C/licenses"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["hydra-agent", "cluster", "list", "--json", "-q", "-c", "x.yaml"]);

        assert!(cli.quiet);
        assert_eq!(cli.config, Some(PathBuf::from("x.yaml")));
        assert!(matches!(
            cli.command,
            Commands::Cluster(ClusterCommands::List { json: true })
        ));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["hydra-agent", "-v", "-q", "check-prereqs"]).is_err());
    }
}

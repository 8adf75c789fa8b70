// file: src/lib.rs
// version: 1.0.0
// guid: f03b7d25-8c61-4e9a-b4d7-2a5e1c8f906b

//! # Hydra Agent
//!
//! Administration wrappers around the `rac` cluster client and the `ring`
//! license client. Each operation builds an argument vector, runs the
//! configured binary synchronously, and turns its text output into typed
//! values or an [`AgentError`].
//!
//! ```no_run
//! use hydra_agent::{config::ConfigLoader, rac::ClusterManager, ring::LicenseManager};
//!
//! # fn main() -> hydra_agent::Result<()> {
//! let config = ConfigLoader::new().load(None)?;
//!
//! for cluster in ClusterManager::from_config(&config).list()? {
//!     println!("{} {}:{}", cluster.name, cluster.host, cluster.port);
//! }
//!
//! let licenses = LicenseManager::from_config(&config).list(None)?;
//! println!("{} license(s) installed", licenses.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod process;
pub mod rac;
pub mod ring;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{AgentError, Result};

/// Version information for the agent
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

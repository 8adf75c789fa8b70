// file: src/rac/cluster.rs
// version: 1.0.0
// guid: 0c7a5e29-b814-4f6d-93e2-d4a8c1f5b730

//! Cluster records and the `rac cluster` wrapper

use super::output::{parse_records, Record};
use crate::config::{AgentConfig, RacSettings};
use crate::error::{AgentError, Result};
use crate::logging::with_operation_span;
use crate::process::ProcessInvoker;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::info;

/// A server cluster as reported by `rac cluster list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    /// Cluster identifier (`cluster` field)
    pub id: String,
    /// Host of the main cluster manager
    pub host: String,
    /// Main port of the cluster manager
    pub port: u16,
    pub name: String,
    /// Seconds before a stopped worker process is killed
    pub expiration_timeout: u32,
    /// Seconds a worker process may live before restart
    pub lifetime_limit: u32,
    /// Worker process memory limit, bytes
    pub max_memory_size: u64,
    /// Seconds a worker may exceed the memory limit
    pub max_memory_time_limit: u64,
    pub security_level: u32,
    pub session_fault_tolerance_level: u32,
    /// `performance` or `memory`
    pub load_balancing_mode: String,
    pub errors_count_threshold: u32,
    pub kill_problem_processes: bool,
    pub kill_by_memory_with_dump: bool,
}

impl Cluster {
    /// Build a cluster from one parsed output block
    ///
    /// `cluster`, `host` and `port` are required; other fields default when
    /// the installed `rac` version does not print them.
    pub fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            id: required(record, "cluster")?.to_string(),
            host: required(record, "host")?.to_string(),
            port: number(record, "port")?
                .ok_or_else(|| AgentError::parse("cluster record is missing field `port`"))?,
            name: record.get("name").unwrap_or_default().to_string(),
            expiration_timeout: number(record, "expiration-timeout")?.unwrap_or_default(),
            lifetime_limit: number(record, "lifetime-limit")?.unwrap_or_default(),
            max_memory_size: number(record, "max-memory-size")?.unwrap_or_default(),
            max_memory_time_limit: number(record, "max-memory-time-limit")?.unwrap_or_default(),
            security_level: number(record, "security-level")?.unwrap_or_default(),
            session_fault_tolerance_level: number(record, "session-fault-tolerance-level")?
                .unwrap_or_default(),
            load_balancing_mode: record
                .get("load-balancing-mode")
                .unwrap_or("performance")
                .to_string(),
            errors_count_threshold: number(record, "errors-count-threshold")?.unwrap_or_default(),
            kill_problem_processes: flag(record, "kill-problem-processes")?,
            kill_by_memory_with_dump: flag(record, "kill-by-memory-with-dump")?,
        })
    }
}

impl TryFrom<&Record> for Cluster {
    type Error = AgentError;

    fn try_from(record: &Record) -> Result<Self> {
        Self::from_record(record)
    }
}

fn required<'r>(record: &'r Record, key: &str) -> Result<&'r str> {
    match record.get(key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AgentError::parse(format!(
            "cluster record is missing field `{}`",
            key
        ))),
    }
}

fn number<T: FromStr>(record: &Record, key: &str) -> Result<Option<T>> {
    match record.get(key) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| {
            AgentError::parse(format!("field `{}` is not a valid number: {:?}", key, value))
        }),
    }
}

fn flag(record: &Record, key: &str) -> Result<bool> {
    match record.get(key) {
        None | Some("") | Some("no") => Ok(false),
        Some("yes") => Ok(true),
        Some(value) => Err(AgentError::parse(format!(
            "field `{}` must be yes or no: {:?}",
            key, value
        ))),
    }
}

/// Wrapper around `rac cluster` commands
#[derive(Debug, Clone)]
pub struct ClusterManager {
    invoker: ProcessInvoker,
    server: Option<String>,
}

impl ClusterManager {
    /// Create a manager for the given `rac` settings
    pub fn new(settings: RacSettings) -> Self {
        Self {
            invoker: ProcessInvoker::new(settings.path),
            server: settings.server,
        }
    }

    /// Create a manager from the agent configuration
    pub fn from_config(config: &AgentConfig) -> Self {
        Self::new(config.rac.clone())
    }

    /// List the clusters registered on the administration server
    pub fn list(&self) -> Result<Vec<Cluster>> {
        with_operation_span("cluster list", || {
            let output = self.invoker.run(&self.args(&["cluster", "list"]))?;

            let clusters = parse_records(&output)
                .map(|record| record.and_then(|r| Cluster::from_record(&r)))
                .collect::<Result<Vec<_>>>()?;

            info!("Found {} cluster(s)", clusters.len());
            Ok(clusters)
        })
    }

    fn args(&self, command: &[&str]) -> Vec<String> {
        let mut args: Vec<String> = command.iter().map(|s| s.to_string()).collect();
        if let Some(server) = &self.server {
            args.push(server.trim().to_string());
        }
        args
    }
}

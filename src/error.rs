// file: src/error.rs
// version: 1.0.0
// guid: 3f6a1c2e-8b4d-4e1a-9c7f-2d5b8e0a41c3

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for the agent
pub type Result<T> = std::result::Result<T, AgentError>;

/// Error types for the administration wrappers
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Failed to start {program}: {source}")]
    ProcessStart {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command `{command}` failed with exit code {}: {}", display_code(.exit_code), trimmed(.stderr))]
    ProcessExecution {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Filesystem error on {}: {source}", display_path(.path))]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none (terminated by signal)".to_string(),
    }
}

fn trimmed(text: &str) -> &str {
    text.trim()
}

fn display_path(path: &std::path::Path) -> std::path::Display<'_> {
    path.display()
}

impl AgentError {
    /// Create a new parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new not-implemented error
    pub fn not_implemented(msg: impl Into<String>) -> Self {
        Self::NotImplemented(msg.into())
    }

    /// Wrap an I/O error together with the path it happened on
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Exit code of a failed external process, if this error carries one
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::ProcessExecution { exit_code, .. } => *exit_code,
            _ => None,
        }
    }
}

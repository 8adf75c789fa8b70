// file: src/logging/mod.rs
// version: 1.0.0
// guid: 6f1b8c3e-d2a7-4950-8e6f-b3c0a9d4e718

//! Logging system for the hydra agent

pub mod logger;

pub use logger::{init_json_logger, init_logger, with_operation_span};

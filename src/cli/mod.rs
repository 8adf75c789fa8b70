// file: src/cli/mod.rs
// version: 1.0.0
// guid: 2c9a7e15-f4b0-4d63-8a2e-91d5c3b7f604

//! Command line interface for the hydra agent

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;

// file: src/rac/mod.rs
// version: 1.0.0
// guid: 4b9e0d63-a75f-41c2-8d1e-e2f7c6a9b058

//! Cluster administration through the `rac` client

pub mod cluster;
pub mod output;

pub use cluster::{Cluster, ClusterManager};
pub use output::{parse_records, Record, Records};

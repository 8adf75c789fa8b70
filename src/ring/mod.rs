// file: src/ring/mod.rs
// version: 1.0.0
// guid: 81f2c4d7-6e3b-4a90-b5d2-3c7e9a0f1d86

//! License administration through the `ring` client

pub mod activation;
pub mod license;

pub use activation::ActivationRequest;
pub use license::LicenseManager;

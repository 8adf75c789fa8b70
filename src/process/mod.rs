// file: src/process/mod.rs
// version: 1.0.0
// guid: 9e5c2a7f-41b8-4d3e-b6a0-58f1c7d2e913

//! External process plumbing shared by the `rac` and `ring` wrappers

pub mod invoker;
pub mod scratch;

pub use invoker::ProcessInvoker;
pub use scratch::ScratchFile;

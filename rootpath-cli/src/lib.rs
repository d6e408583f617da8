//! Library exports for rootpath-cli.
//!
//! The binary and the integration benchmarks share the command definitions
//! through this crate.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;

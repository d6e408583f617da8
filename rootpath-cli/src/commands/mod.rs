//! CLI command implementations.
//!
//! - `resolve`: Resolve an untrusted path under a root
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod resolve;
pub mod validate;

pub use completions::CompletionsCommand;
pub use resolve::{OutputFormat, ResolveCommand};
pub use validate::ValidateCommand;

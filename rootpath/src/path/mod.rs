//! Root-confined path resolution.
//!
//! This module maps untrusted path strings onto a trusted root directory.
//!
//! # Key Concepts
//!
//! ## Rooted paths
//!
//! A [`RootedPath`] is a lexically clean path relative to the root. Joining
//! `..` onto the root leaves it at the root, so no sequence of components can
//! describe a location above it.
//!
//! ## Resolution
//!
//! [`PathResolver`] walks the input one component at a time. Every component
//! is joined onto the rooted path and then inspected with an lstat:
//!
//! - missing or ordinary components are accepted
//! - symlinks are read, and their raw target is walked next, through the same
//!   clamp; an absolute target restarts from the root
//!
//! At most [`MAX_SYMLINK_LIMIT`] symlinks are expanded per call.
//!
//! # Examples
//!
//! ```no_run
//! use rootpath::path::PathResolver;
//! use std::path::Path;
//!
//! let resolver = PathResolver::new();
//!
//! // If /srv/checkout/current -> /releases/7, this stays under the root
//! let resolved = resolver.resolve("/srv/checkout", "current/bin").unwrap();
//! assert_eq!(resolved.path(), Path::new("/srv/checkout/releases/7/bin"));
//! ```

pub mod normalize;
pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use resolver::{PathResolver, MAX_SYMLINK_LIMIT};
pub use types::{ResolvedPath, RootedPath};

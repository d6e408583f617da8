#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # rootpath
//!
//! Resolve untrusted paths under a trusted root directory.
//!
//! Paths supplied by an untrusted party (a checkout, an archive, a client)
//! are mapped onto a location that is guaranteed to lie under the root, even
//! when components of the path are symlinks pointing elsewhere. Symlinks are
//! expanded one hop at a time with `..` clamped at the root and absolute
//! targets reinterpreted relative to it.
//!
//! ## Core Types
//!
//! - [`PathResolver`]: The resolver, generic over its [`Filesystem`]
//! - [`ResolvedPath`] and [`RootedPath`]: Resolution results
//! - [`SymlinkObserver`]: Per-hop audit and veto hook
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use rootpath::observer::SymlinkRecorder;
//!
//! // Plain resolution
//! let path = rootpath::resolve("/srv/checkout", "../../etc/passwd").unwrap();
//! assert_eq!(path, std::path::Path::new("/srv/checkout/etc/passwd"));
//!
//! // Record the symlinks the result depends on
//! let mut recorder = SymlinkRecorder::new();
//! let path = rootpath::resolve_with("/srv/checkout", "current/bin", &mut recorder).unwrap();
//! println!("{} via {} symlinks", path.display(), recorder.hops().len());
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod observer;
pub mod path;

use std::path::{Path, PathBuf};

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, PolicyConfig};
pub use error::{BoxError, Error, Result};
pub use fs::{Filesystem, OsFilesystem};
pub use logging::{init_logger, LogLevel, Logger};
pub use observer::{SymlinkHop, SymlinkObserver, SymlinkPolicy, SymlinkRecorder};
pub use path::{PathResolver, ResolvedPath, RootedPath, MAX_SYMLINK_LIMIT};

/// Resolve `unsafe_path` under `root` on the host filesystem.
///
/// Shorthand for `PathResolver::new().resolve(root, unsafe_path)`.
///
/// # Errors
///
/// See [`PathResolver::resolve`].
pub fn resolve(root: impl AsRef<Path>, unsafe_path: impl AsRef<Path>) -> Result<PathBuf> {
    PathResolver::new()
        .resolve(root, unsafe_path)
        .map(ResolvedPath::into_path_buf)
}

/// Resolve `unsafe_path` under `root` on the host filesystem, reporting each
/// symlink hop to `observer`.
///
/// # Errors
///
/// See [`PathResolver::resolve_with`].
pub fn resolve_with(
    root: impl AsRef<Path>,
    unsafe_path: impl AsRef<Path>,
    observer: &mut dyn SymlinkObserver,
) -> Result<PathBuf> {
    PathResolver::new()
        .resolve_with(root, unsafe_path, observer)
        .map(ResolvedPath::into_path_buf)
}

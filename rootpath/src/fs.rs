//! The filesystem collaborator used during resolution.
//!
//! Resolution needs exactly two read-only primitives: the link status of a
//! path (without following it) and the raw target of a symlink. Both live
//! behind [`Filesystem`] so the walk can be exercised against test doubles.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only filesystem inspection used by the resolver.
///
/// Implementations must not follow the final component of `path`; the
/// resolver relies on seeing symlinks themselves.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem {
    /// Reports whether `path` is a symlink, without following it.
    ///
    /// A missing path must be reported as an error of kind
    /// [`io::ErrorKind::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error of the lstat-equivalent call.
    fn is_symlink(&self, path: &Path) -> io::Result<bool>;

    /// Returns the raw, unexpanded target of the symlink at `path`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error of the readlink-equivalent call.
    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;
}

/// The host filesystem, via `std::fs::symlink_metadata` and `std::fs::read_link`.
///
/// # Examples
///
/// ```no_run
/// use rootpath::fs::{Filesystem, OsFilesystem};
/// use std::path::Path;
///
/// let is_link = OsFilesystem.is_symlink(Path::new("/tmp")).unwrap();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn is_symlink(&self, path: &Path) -> io::Result<bool> {
        fs::symlink_metadata(path).map(|meta| meta.file_type().is_symlink())
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        fs::read_link(path)
    }
}

impl<F: Filesystem + ?Sized> Filesystem for &F {
    fn is_symlink(&self, path: &Path) -> io::Result<bool> {
        (**self).is_symlink(path)
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        (**self).read_link(path)
    }
}

/// In-memory tree of directories and symlinks for resolver tests.
///
/// Any path that was not registered is reported as missing.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryFilesystem {
    links: std::collections::HashMap<PathBuf, PathBuf>,
    dirs: std::collections::HashSet<PathBuf>,
}

#[cfg(test)]
impl MemoryFilesystem {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }

    pub(crate) fn with_link(
        mut self,
        path: impl Into<PathBuf>,
        target: impl Into<PathBuf>,
    ) -> Self {
        self.links.insert(path.into(), target.into());
        self
    }
}

#[cfg(test)]
impl Filesystem for MemoryFilesystem {
    fn is_symlink(&self, path: &Path) -> io::Result<bool> {
        if self.links.contains_key(path) {
            Ok(true)
        } else if self.dirs.contains(path) {
            Ok(false)
        } else {
            Err(io::Error::from(io::ErrorKind::NotFound))
        }
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        self.links
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::InvalidInput))
    }
}

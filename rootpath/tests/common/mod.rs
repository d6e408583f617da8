//! Common test utilities for integration tests.
//!
//! This module provides a small fixture builder for laying out directory
//! trees with symlinks under a temporary root.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary root directory populated by the test.
///
/// The directory will be automatically cleaned up when the sandbox is
/// dropped.
pub struct Sandbox {
    dir: TempDir,
}

#[allow(dead_code)]
impl Sandbox {
    /// Creates an empty sandbox.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute host path for a root-relative path.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Creates a directory (and its parents) under the root.
    pub fn dir(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.path(relative)).unwrap();
        self
    }

    /// Creates a regular file under the root, creating parents as needed.
    pub fn file(&self, relative: &str, contents: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
        self
    }

    /// Creates a symlink at `relative` whose raw target is `target`.
    #[cfg(unix)]
    pub fn link(&self, relative: &str, target: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        std::os::unix::fs::symlink(target, path).unwrap();
        self
    }
}

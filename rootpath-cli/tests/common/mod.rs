//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - An isolated environment with its own home and working directories
//! - A root directory to lay out symlink trees under
//! - Command builders with the environment pre-configured

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated home, working and root directories.
///
/// Commands run from `work/` with `HOME` pointed at `home/`, so neither a
/// user configuration nor a `rootpath.yaml` above the temp directory can
/// leak into a test.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Root directory for resolution
    pub root: PathBuf,
    /// Working directory commands run in
    pub work_dir: PathBuf,
    /// Stand-in home directory
    pub home_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let root = temp_path.join("root");
        let work_dir = temp_path.join("work");
        let home_dir = temp_path.join("home");
        for dir in [&root, &work_dir, &home_dir] {
            fs::create_dir_all(dir).expect("Failed to create test directory");
        }

        Self {
            temp_dir,
            temp_path,
            root,
            work_dir,
            home_dir,
        }
    }

    /// Get a command builder running in the isolated environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("rootpath").expect("Failed to find rootpath binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", &self.home_dir)
            .env_remove("ROOTPATH_ROOT")
            .env_remove("ROOTPATH_ALLOW_SYMLINKS")
            .env_remove("ROOTPATH_ALLOW_ABSOLUTE_TARGETS")
            .env_remove("ROOTPATH_CONFIG")
            .env_remove("ROOTPATH_LOG_MODE");
        cmd
    }

    /// A `resolve` command with `--root` set to this environment's root.
    pub fn resolve(&self, path: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("resolve").arg("--root").arg(&self.root).arg(path);
        cmd
    }

    /// Absolute path of a root-relative path.
    pub fn under_root(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Create a directory under the root.
    pub fn dir(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.under_root(relative)).expect("Failed to create directory");
        self
    }

    /// Create a regular file under the root.
    pub fn file(&self, relative: &str, contents: &str) -> &Self {
        let path = self.under_root(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directory");
        }
        fs::write(path, contents).expect("Failed to write file");
        self
    }

    /// Create a symlink under the root with a raw target.
    #[cfg(unix)]
    pub fn link(&self, relative: &str, target: &str) -> &Self {
        let path = self.under_root(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directory");
        }
        std::os::unix::fs::symlink(target, path).expect("Failed to create symlink");
        self
    }

    /// Write `rootpath.yaml` into the working directory.
    pub fn write_project_config(&self, contents: &str) -> PathBuf {
        let path = self.work_dir.join("rootpath.yaml");
        fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Write an arbitrary file next to the other directories.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// The root path as printed by the CLI.
    pub fn root_str(&self) -> String {
        path_str(&self.root)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Matches output that is exactly `path` on one line.
#[allow(dead_code)]
pub fn line(path: &Path) -> predicates::str::DifferencePredicate {
    predicates::str::diff(format!("{}\n", path.display()))
}

#[allow(dead_code)]
pub fn path_str(path: &Path) -> String {
    path.display().to_string()
}

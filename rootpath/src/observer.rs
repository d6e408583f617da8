//! Observers invoked once per symlink hop during resolution.
//!
//! An observer sees the root-relative path where a symlink was found and the
//! link's raw target, before the target is expanded. Returning an error aborts
//! the resolution with [`Error::ObserverRejected`](crate::Error::ObserverRejected).
//!
//! Any `FnMut(&Path, &Path) -> Result<(), E>` closure is an observer:
//!
//! ```no_run
//! use rootpath::resolve_with;
//! use std::path::Path;
//!
//! let mut seen = 0;
//! let mut count = |_: &Path, _: &Path| -> Result<(), std::io::Error> {
//!     seen += 1;
//!     Ok(())
//! };
//! let resolved = resolve_with("/srv/checkout", "docs/index.html", &mut count).unwrap();
//! ```

use std::path::{Path, PathBuf};

use crate::config::PolicyConfig;
use crate::error::{BoxError, Error};
use crate::path::normalize::is_rooted;
use crate::path::RootedPath;

/// Capability invoked for every symlink the resolver expands.
pub trait SymlinkObserver {
    /// Called with the root-relative location of the link and its raw target.
    ///
    /// # Errors
    ///
    /// Any error aborts resolution and is returned to the caller unchanged
    /// as the source of `ObserverRejected`.
    fn on_symlink(&mut self, path: &Path, target: &Path) -> Result<(), BoxError>;
}

impl<F, E> SymlinkObserver for F
where
    F: FnMut(&Path, &Path) -> Result<(), E>,
    E: Into<BoxError>,
{
    fn on_symlink(&mut self, path: &Path, target: &Path) -> Result<(), BoxError> {
        self(path, target).map_err(Into::into)
    }
}

/// One symlink expansion seen during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymlinkHop {
    /// Root-relative path of the link, with a leading separator.
    pub path: PathBuf,
    /// Raw, unexpanded link target.
    pub target: PathBuf,
}

/// Records every hop in the order it was expanded.
///
/// Callers that key caches on a resolved path use this to learn which links
/// the result depends on.
///
/// # Examples
///
/// ```no_run
/// use rootpath::observer::SymlinkRecorder;
/// use rootpath::resolve_with;
///
/// let mut recorder = SymlinkRecorder::new();
/// let resolved = resolve_with("/srv/checkout", "current/bin", &mut recorder).unwrap();
/// for hop in recorder.hops() {
///     println!("{} -> {}", hop.path.display(), hop.target.display());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SymlinkRecorder {
    hops: Vec<SymlinkHop>,
}

impl SymlinkRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hops recorded so far.
    #[must_use]
    pub fn hops(&self) -> &[SymlinkHop] {
        &self.hops
    }

    /// Take the recorded hops.
    #[must_use]
    pub fn into_hops(self) -> Vec<SymlinkHop> {
        self.hops
    }
}

impl SymlinkObserver for SymlinkRecorder {
    fn on_symlink(&mut self, path: &Path, target: &Path) -> Result<(), BoxError> {
        self.hops.push(SymlinkHop {
            path: path.to_path_buf(),
            target: target.to_path_buf(),
        });
        Ok(())
    }
}

/// Logs each hop at debug level through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

impl SymlinkObserver for LoggingObserver {
    fn on_symlink(&mut self, path: &Path, target: &Path) -> Result<(), BoxError> {
        log::debug!("symlink {} -> {}", path.display(), target.display());
        Ok(())
    }
}

/// Rejects hops that break a [`PolicyConfig`].
///
/// # Examples
///
/// ```
/// use rootpath::config::PolicyConfig;
/// use rootpath::observer::{SymlinkObserver, SymlinkPolicy};
/// use std::path::Path;
///
/// let mut policy = SymlinkPolicy::from_config(&PolicyConfig {
///     allow_absolute_targets: Some(false),
///     ..Default::default()
/// });
/// assert!(policy.on_symlink(Path::new("/a"), Path::new("b")).is_ok());
/// assert!(policy.on_symlink(Path::new("/a"), Path::new("/etc")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SymlinkPolicy {
    allow_symlinks: bool,
    allow_absolute_targets: bool,
    denied_prefixes: Vec<RootedPath>,
}

impl Default for SymlinkPolicy {
    fn default() -> Self {
        Self {
            allow_symlinks: true,
            allow_absolute_targets: true,
            denied_prefixes: Vec::new(),
        }
    }
}

impl SymlinkPolicy {
    /// Build a policy from configuration, filling unset fields with the
    /// permissive defaults.
    #[must_use]
    pub fn from_config(config: &PolicyConfig) -> Self {
        Self {
            allow_symlinks: config.allow_symlinks.unwrap_or(true),
            allow_absolute_targets: config.allow_absolute_targets.unwrap_or(true),
            denied_prefixes: config
                .denied_prefixes
                .iter()
                .flatten()
                .map(|prefix| RootedPath::lexical(prefix))
                .collect(),
        }
    }

    fn check(&self, path: &Path, target: &Path) -> Result<(), Error> {
        let violation = |reason: String| Error::PolicyViolation {
            path: path.to_path_buf(),
            target: target.to_path_buf(),
            reason,
        };

        if !self.allow_symlinks {
            return Err(violation("symlinks are not allowed".to_string()));
        }
        if !self.allow_absolute_targets && is_rooted(target) {
            return Err(violation(
                "absolute symlink targets are not allowed".to_string(),
            ));
        }

        let location = RootedPath::lexical(path);
        if let Some(prefix) = self
            .denied_prefixes
            .iter()
            .find(|prefix| is_under(&location, prefix))
        {
            return Err(violation(format!("symlinks under {prefix} are denied")));
        }
        Ok(())
    }
}

impl SymlinkObserver for SymlinkPolicy {
    fn on_symlink(&mut self, path: &Path, target: &Path) -> Result<(), BoxError> {
        self.check(path, target).map_err(Into::into)
    }
}

fn is_under(path: &RootedPath, prefix: &RootedPath) -> bool {
    path.depth() >= prefix.depth()
        && path
            .components()
            .zip(prefix.components())
            .all(|(a, b)| a == b)
}

/// Two observers run in order; the second is skipped if the first fails.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

/// Run `first` then `second` on every hop.
///
/// # Examples
///
/// ```
/// use rootpath::observer::{chain, LoggingObserver, SymlinkRecorder};
///
/// let observer = chain(LoggingObserver, SymlinkRecorder::new());
/// ```
pub fn chain<A, B>(first: A, second: B) -> Chain<A, B>
where
    A: SymlinkObserver,
    B: SymlinkObserver,
{
    Chain { first, second }
}

impl<A, B> Chain<A, B> {
    /// Split back into the two observers.
    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> SymlinkObserver for Chain<A, B>
where
    A: SymlinkObserver,
    B: SymlinkObserver,
{
    fn on_symlink(&mut self, path: &Path, target: &Path) -> Result<(), BoxError> {
        self.first.on_symlink(path, target)?;
        self.second.on_symlink(path, target)
    }
}

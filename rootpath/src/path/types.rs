//! Core types for root-confined paths.
//!
//! [`RootedPath`] is the accumulator the resolver builds: a lexically clean
//! path relative to the trusted root that can never climb above it.
//! [`ResolvedPath`] is what a successful resolution returns.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

use crate::path::normalize::{classify, split_components, Step};

/// A clean path relative to a trusted root.
///
/// It holds only ordinary names: no `.`, no `..`, no empty components. It is
/// rendered with a single leading separator (`/` is the root itself).
/// Joining a `..` onto the root leaves it at the root.
///
/// # Examples
///
/// ```
/// use rootpath::path::RootedPath;
/// use std::path::Path;
///
/// let path = RootedPath::root().join("a".as_ref()).join("..".as_ref()).join("..".as_ref());
/// assert!(path.is_root());
///
/// let path = RootedPath::lexical(Path::new("../../etc/./passwd"));
/// assert_eq!(path.to_path_buf(), Path::new("/etc/passwd"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RootedPath {
    components: Vec<OsString>,
}

impl RootedPath {
    /// The root marker.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Lexically clamp an arbitrary path under the root, without touching
    /// the filesystem.
    #[must_use]
    pub fn lexical(path: &Path) -> Self {
        split_components(path)
            .iter()
            .fold(Self::root(), |acc, component| acc.join(component))
    }

    /// Join a single component, re-rooted at the root marker.
    ///
    /// `..` removes the last name if there is one and is otherwise ignored.
    #[must_use]
    pub fn join(&self, component: &OsStr) -> Self {
        let mut next = self.clone();
        match classify(component) {
            Step::Stay => {}
            Step::Up => {
                next.components.pop();
            }
            Step::Down(name) => next.components.push(name.to_os_string()),
        }
        next
    }

    /// Whether this is the root itself.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.components.is_empty()
    }

    /// Number of names below the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.components.len()
    }

    /// Iterate over the names below the root.
    pub fn components(&self) -> impl Iterator<Item = &OsStr> {
        self.components.iter().map(OsString::as_os_str)
    }

    /// The path with its leading separator, e.g. `/a/b`.
    #[must_use]
    pub fn to_path_buf(&self) -> PathBuf {
        let mut path = PathBuf::from(MAIN_SEPARATOR_STR);
        path.extend(&self.components);
        path
    }

    /// The path without its leading separator, e.g. `a/b` (empty for root).
    #[must_use]
    pub fn relative(&self) -> PathBuf {
        self.components.iter().collect()
    }
}

impl fmt::Display for RootedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_path_buf().display())
    }
}

/// The outcome of a successful resolution.
///
/// # Examples
///
/// ```
/// use rootpath::path::PathResolver;
///
/// let resolved = PathResolver::new().resolve("/r", "../../etc/passwd").unwrap();
/// assert_eq!(resolved.path(), std::path::Path::new("/r/etc/passwd"));
/// assert_eq!(resolved.relative().to_string(), "/etc/passwd");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    path: PathBuf,
    relative: RootedPath,
    links_walked: usize,
}

impl ResolvedPath {
    pub(crate) fn new(path: PathBuf, relative: RootedPath, links_walked: usize) -> Self {
        Self {
            path,
            relative,
            links_walked,
        }
    }

    /// The full path under the root.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The same location, relative to the root.
    #[must_use]
    pub fn relative(&self) -> &RootedPath {
        &self.relative
    }

    /// How many symlinks were expanded to reach this path.
    #[must_use]
    pub fn links_walked(&self) -> usize {
        self.links_walked
    }

    /// Consume and return the full path.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl From<ResolvedPath> for PathBuf {
    fn from(resolved: ResolvedPath) -> Self {
        resolved.path
    }
}

//! Lexical path helpers used by the resolver.
//!
//! Nothing in this module touches the filesystem. It turns untrusted input
//! (and symlink targets read during resolution) into the sequence of
//! components the resolver walks, and joins a root-relative result back onto
//! the trusted root.

use std::collections::VecDeque;
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

use crate::path::types::RootedPath;

/// What joining a single component does to a root-relative path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    /// Empty or `.`: the path is unchanged.
    Stay,
    /// `..`: drop the last component, never above root.
    Up,
    /// Any other name: descend into it.
    Down(&'a OsStr),
}

/// Classify one component of an untrusted path.
///
/// # Examples
///
/// ```
/// use rootpath::path::normalize::{classify, Step};
/// use std::ffi::OsStr;
///
/// assert_eq!(classify(OsStr::new("..")), Step::Up);
/// assert_eq!(classify(OsStr::new(".")), Step::Stay);
/// assert_eq!(classify(OsStr::new("etc")), Step::Down(OsStr::new("etc")));
/// ```
#[must_use]
pub fn classify(component: &OsStr) -> Step<'_> {
    if component.is_empty() || component == "." {
        Step::Stay
    } else if component == ".." {
        Step::Up
    } else {
        Step::Down(component)
    }
}

/// Remove any drive or volume prefix (`C:`, `\\server\share`) from a path.
///
/// On Unix this never changes the path. The prefix is a platform artifact,
/// not part of the trust boundary, so it is simply dropped.
///
/// # Examples
///
/// ```
/// use rootpath::path::normalize::strip_volume;
/// use std::path::Path;
///
/// assert_eq!(strip_volume(Path::new("/a/b")), Path::new("/a/b"));
/// ```
#[must_use]
pub fn strip_volume(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::Prefix(_)))
        .collect()
}

/// Whether a symlink target names an absolute location.
///
/// Any rooted target counts, with or without a volume prefix; the resolver
/// reinterprets it relative to the trusted root.
#[must_use]
pub fn is_rooted(path: &Path) -> bool {
    path.has_root()
}

/// Split a path into the components the resolver walks, in order.
///
/// Separators follow host conventions (both `/` and `\` on Windows). Volume
/// prefixes and root markers are dropped, and so are `.` components, since
/// they never change the accumulated path. `..` is kept.
///
/// # Examples
///
/// ```
/// use rootpath::path::normalize::split_components;
/// use std::path::Path;
///
/// let parts: Vec<_> = split_components(Path::new("/a/./b/../c/"))
///     .into_iter()
///     .collect();
/// assert_eq!(parts, ["a", "b", "..", "c"]);
/// ```
#[must_use]
pub fn split_components(path: &Path) -> VecDeque<OsString> {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_os_string()),
            Component::ParentDir => Some(OsString::from("..")),
            Component::Prefix(_) | Component::RootDir | Component::CurDir => None,
        })
        .collect()
}

/// Push a symlink target onto the front of the remaining input so it is
/// walked before anything that followed the link.
pub fn prepend_target(remaining: &mut VecDeque<OsString>, target: &Path) {
    for component in split_components(target).into_iter().rev() {
        remaining.push_front(component);
    }
}

/// Join a root-relative path onto the trusted root.
///
/// The root itself is used as given. When `relative` is the root marker the
/// result is exactly `root`.
///
/// # Examples
///
/// ```
/// use rootpath::path::normalize::join_under_root;
/// use rootpath::path::RootedPath;
/// use std::path::{Path, PathBuf};
///
/// let rel = RootedPath::lexical(Path::new("../../etc/passwd"));
/// assert_eq!(join_under_root(Path::new("/r"), &rel), PathBuf::from("/r/etc/passwd"));
/// assert_eq!(join_under_root(Path::new("/r"), &RootedPath::root()), PathBuf::from("/r"));
/// ```
#[must_use]
pub fn join_under_root(root: &Path, relative: &RootedPath) -> PathBuf {
    if relative.is_root() {
        return root.to_path_buf();
    }
    let mut full = root.to_path_buf();
    for name in relative.components() {
        full.push(name);
    }
    full
}

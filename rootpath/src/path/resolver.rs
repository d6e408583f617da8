//! Root-confined path resolution.
//!
//! This module provides the `PathResolver` type, which maps an untrusted path
//! onto a location under a trusted root, expanding symlinks one hop at a time
//! so that neither `..` nor absolute link targets can leave the root.

use std::io;
use std::path::Path;

use crate::error::{Error, Result};
use crate::fs::{Filesystem, OsFilesystem};
use crate::observer::SymlinkObserver;
use crate::path::normalize::{
    is_rooted, join_under_root, prepend_target, split_components, strip_volume,
};
use crate::path::types::{ResolvedPath, RootedPath};

/// Maximum number of symlinks expanded in a single resolution.
pub const MAX_SYMLINK_LIMIT: usize = 255;

/// Resolves untrusted paths under a trusted root.
///
/// Each component of the input is joined lexically onto a root-relative
/// accumulator and then checked with an lstat. Symlinks are never followed by
/// the operating system: their raw target is read and pushed in front of the
/// remaining input, and an absolute target restarts the walk at the root. A
/// component that does not exist is accepted as-is, so a path that does not
/// exist yet resolves to where it would be created.
///
/// The result was symlink-free when it was inspected. Nothing stops another
/// process from swapping a component for a symlink afterwards; callers that
/// need more should open the result immediately.
///
/// # Examples
///
/// ```no_run
/// use rootpath::path::PathResolver;
///
/// let resolver = PathResolver::new();
///
/// // `..` never climbs above the root
/// let resolved = resolver.resolve("/srv/checkout", "../../etc/passwd").unwrap();
/// assert_eq!(resolved.path(), std::path::Path::new("/srv/checkout/etc/passwd"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathResolver<F = OsFilesystem> {
    fs: F,
}

impl PathResolver {
    /// Create a resolver backed by the host filesystem.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootpath::path::PathResolver;
    ///
    /// let resolver = PathResolver::new();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: Filesystem> PathResolver<F> {
    /// Create a resolver backed by another [`Filesystem`].
    #[must_use]
    pub fn with_filesystem(fs: F) -> Self {
        Self { fs }
    }

    /// The filesystem this resolver inspects.
    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    /// Resolve `unsafe_path` under `root`.
    ///
    /// An empty `unsafe_path` returns `root` unchanged without touching the
    /// filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Inspecting a component fails for any reason other than it not
    ///   existing (`LinkStatus`)
    /// - More than [`MAX_SYMLINK_LIMIT`] symlinks are expanded (`TooManyLinks`)
    /// - Reading a symlink target fails (`ReadLink`)
    pub fn resolve(
        &self,
        root: impl AsRef<Path>,
        unsafe_path: impl AsRef<Path>,
    ) -> Result<ResolvedPath> {
        self.walk(root.as_ref(), unsafe_path.as_ref(), None)
    }

    /// Resolve `unsafe_path` under `root`, reporting every symlink hop to
    /// `observer` before it is expanded.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`resolve`](Self::resolve), plus
    /// `ObserverRejected` as soon as the observer fails.
    pub fn resolve_with(
        &self,
        root: impl AsRef<Path>,
        unsafe_path: impl AsRef<Path>,
        observer: &mut dyn SymlinkObserver,
    ) -> Result<ResolvedPath> {
        self.walk(root.as_ref(), unsafe_path.as_ref(), Some(observer))
    }

    fn walk(
        &self,
        root: &Path,
        unsafe_path: &Path,
        mut observer: Option<&mut dyn SymlinkObserver>,
    ) -> Result<ResolvedPath> {
        if unsafe_path.as_os_str().is_empty() {
            return Ok(ResolvedPath::new(root.to_path_buf(), RootedPath::root(), 0));
        }

        let mut remaining = split_components(&strip_volume(unsafe_path));
        let mut path = RootedPath::root();
        let mut links_walked = 0;

        while let Some(part) = remaining.pop_front() {
            let next = path.join(&part);
            if next.is_root() {
                path = next;
                continue;
            }
            let full = join_under_root(root, &next);

            match self.fs.is_symlink(&full) {
                Ok(true) => {}
                Ok(false) => {
                    log::trace!("{} is not a symlink", full.display());
                    path = next;
                    continue;
                }
                // Nothing to expand.
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::trace!("{} does not exist", full.display());
                    path = next;
                    continue;
                }
                Err(source) => return Err(Error::LinkStatus { path: full, source }),
            }

            links_walked += 1;
            if links_walked > MAX_SYMLINK_LIMIT {
                log::warn!(
                    "giving up on {} after {MAX_SYMLINK_LIMIT} symlinks",
                    unsafe_path.display()
                );
                return Err(Error::TooManyLinks {
                    path: full,
                    limit: MAX_SYMLINK_LIMIT,
                });
            }

            let target = self.fs.read_link(&full).map_err(|source| Error::ReadLink {
                path: full.clone(),
                source,
            })?;
            let location = next.to_path_buf();
            log::debug!("expanding {} -> {}", location.display(), target.display());

            if let Some(observer) = observer.as_deref_mut() {
                observer.on_symlink(&location, &target).map_err(|source| {
                    Error::ObserverRejected {
                        path: location.clone(),
                        target: target.clone(),
                        source,
                    }
                })?;
            }

            prepend_target(&mut remaining, &target);
            if is_rooted(&target) {
                path = RootedPath::root();
            }
        }

        let resolved = join_under_root(root, &path);
        log::debug!(
            "resolved {} to {} ({links_walked} symlinks)",
            unsafe_path.display(),
            resolved.display()
        );
        Ok(ResolvedPath::new(resolved, path, links_walked))
    }
}

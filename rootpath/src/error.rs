//! Error types for the rootpath library.
//!
//! Resolution failures keep the exact `io::Error` the filesystem reported (or
//! the exact error an observer returned) as their `source`, so callers can
//! inspect the original cause. Everything is expressed through a single
//! `thiserror` enum.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a rootpath error.
///
/// # Examples
///
/// ```
/// use rootpath::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(255)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error returned by symlink observers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for the rootpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// More symlinks were expanded than the resolver allows in one call.
    #[error("too many levels of symbolic links at {} (limit {limit})", path.display())]
    TooManyLinks {
        /// Full path of the link that would have exceeded the limit.
        path: PathBuf,
        /// The symlink budget that was exhausted.
        limit: usize,
    },

    /// Querying the link status of a component failed for a reason other
    /// than the component not existing.
    #[error("cannot inspect {}: {source}", path.display())]
    LinkStatus {
        /// Full path that was being inspected.
        path: PathBuf,
        /// The filesystem error, unchanged.
        #[source]
        source: io::Error,
    },

    /// Reading a symlink target failed.
    #[error("cannot read symlink {}: {source}", path.display())]
    ReadLink {
        /// Full path of the symlink.
        path: PathBuf,
        /// The filesystem error, unchanged.
        #[source]
        source: io::Error,
    },

    /// The symlink observer refused a hop.
    #[error("symlink {} -> {} rejected: {source}", path.display(), target.display())]
    ObserverRejected {
        /// Root-relative path at which the symlink was found.
        path: PathBuf,
        /// Raw, unexpanded link target.
        target: PathBuf,
        /// The observer's error, unchanged.
        #[source]
        source: BoxError,
    },

    /// A symlink hop violated the configured policy.
    #[error("policy violation for {} -> {}: {reason}", path.display(), target.display())]
    PolicyViolation {
        /// Root-relative path at which the symlink was found.
        path: PathBuf,
        /// Raw link target.
        target: PathBuf,
        /// Which rule was broken.
        reason: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error outside of resolution (e.g. reading a config file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Returns true if the symlink budget was exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootpath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::TooManyLinks { path: PathBuf::from("/r/x"), limit: 255 };
    /// assert!(err.is_too_many_links());
    /// ```
    #[must_use]
    pub fn is_too_many_links(&self) -> bool {
        matches!(self, Self::TooManyLinks { .. })
    }

    /// Returns the filesystem error behind a link-status or readlink failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootpath::Error;
    /// use std::io;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::LinkStatus {
    ///     path: PathBuf::from("/r/secret"),
    ///     source: io::Error::from(io::ErrorKind::PermissionDenied),
    /// };
    /// assert_eq!(err.io_error().unwrap().kind(), io::ErrorKind::PermissionDenied);
    /// ```
    #[must_use]
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::LinkStatus { source, .. } | Self::ReadLink { source, .. } => Some(source),
            Self::Io(source) => Some(source),
            _ => None,
        }
    }

    /// Returns the error an observer produced, if this failure came from one.
    #[must_use]
    pub fn observer_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::ObserverRejected { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::LinkStatus { source, .. }
            | Error::ReadLink { source, .. }
            | Error::Io(source) => source,
            Error::TooManyLinks { .. } => eloop(),
            other => io::Error::other(other),
        }
    }
}

#[cfg(unix)]
fn eloop() -> io::Error {
    io::Error::from_raw_os_error(libc::ELOOP)
}

#[cfg(not(unix))]
fn eloop() -> io::Error {
    io::Error::other("too many levels of symbolic links")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_links_error() {
        let err = Error::TooManyLinks {
            path: PathBuf::from("/root/x"),
            limit: 255,
        };
        let display = format!("{err}");
        assert!(display.contains("too many levels of symbolic links"));
        assert!(display.contains("255"));
        assert!(err.is_too_many_links());
        assert!(err.io_error().is_none());
    }

    #[test]
    fn test_link_status_keeps_source() {
        let err = Error::LinkStatus {
            path: PathBuf::from("/root/locked"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(
            err.io_error().map(io::Error::kind),
            Some(io::ErrorKind::PermissionDenied)
        );
        let display = format!("{err}");
        assert!(display.contains("cannot inspect"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_observer_rejected_keeps_source() {
        let err = Error::ObserverRejected {
            path: PathBuf::from("/a"),
            target: PathBuf::from("/etc"),
            source: "nope".into(),
        };
        assert_eq!(err.observer_error().unwrap().to_string(), "nope");
        assert!(format!("{err}").contains("rejected"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "root".to_string(),
            message: "must be absolute".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("root"));
        assert!(display.contains("must be absolute"));
    }

    #[test]
    fn test_into_io_error_passes_kind_through() {
        let err = Error::ReadLink {
            path: PathBuf::from("/root/link"),
            source: io::Error::from(io::ErrorKind::InvalidInput),
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }

    #[cfg(unix)]
    #[test]
    fn test_too_many_links_maps_to_eloop() {
        let err = Error::TooManyLinks {
            path: PathBuf::from("/root/x"),
            limit: 255,
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.raw_os_error(), Some(libc::ELOOP));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }
}

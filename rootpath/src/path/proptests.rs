//! Property-based tests for root-confined resolution.
//!
//! Resolution runs against an in-memory tree with randomly generated
//! symlinks, including absolute targets, `..`-heavy targets and cycles.

use super::normalize::join_under_root;
use super::resolver::{PathResolver, MAX_SYMLINK_LIMIT};
use super::types::RootedPath;
use crate::error::Error;
use crate::fs::MemoryFilesystem;
use crate::observer::SymlinkRecorder;
use proptest::prelude::*;
use std::path::{Component, Path, PathBuf};

const ROOT: &str = "/jail";

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("a".to_string()),
        Just("b".to_string()),
        Just("c".to_string()),
        "[a-z]{1,4}",
    ]
}

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => name_strategy(),
        2 => Just("..".to_string()),
        1 => Just(".".to_string()),
        1 => Just(String::new()),
    ]
}

fn untrusted_path_strategy() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec(segment_strategy(), 0..10),
    )
        .prop_map(|(absolute, parts)| {
            let joined = parts.join("/");
            if absolute {
                format!("/{joined}")
            } else {
                joined
            }
        })
}

fn clean_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec("[a-z0-9_-]{1,10}", 1..6).prop_map(|parts| parts.iter().collect())
}

fn tree_strategy() -> impl Strategy<Value = MemoryFilesystem> {
    prop::collection::vec(
        (
            prop::collection::vec(name_strategy(), 1..3),
            untrusted_path_strategy(),
        ),
        0..6,
    )
    .prop_map(|links| {
        links
            .into_iter()
            .fold(MemoryFilesystem::new(), |fs, (location, target)| {
                let path = location
                    .iter()
                    .fold(PathBuf::from(ROOT), |path, part| path.join(part));
                fs.with_link(path, target)
            })
    })
}

fn assert_confined(path: &Path) -> Result<(), TestCaseError> {
    prop_assert!(path.starts_with(ROOT), "{} escaped {ROOT}", path.display());
    for component in path.components() {
        prop_assert!(
            !matches!(component, Component::ParentDir | Component::CurDir),
            "{} is not clean",
            path.display()
        );
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Without symlinks resolution is the pure lexical clamp.
    #[test]
    fn resolution_without_links_is_lexical(input in untrusted_path_strategy()) {
        let resolver = PathResolver::with_filesystem(MemoryFilesystem::new());
        let resolved = resolver.resolve(ROOT, &input).unwrap();
        let expected = if input.is_empty() {
            PathBuf::from(ROOT)
        } else {
            join_under_root(Path::new(ROOT), &RootedPath::lexical(Path::new(&input)))
        };
        prop_assert_eq!(resolved.path(), expected.as_path());
        prop_assert_eq!(resolved.links_walked(), 0);
    }

    // Whatever the links point at, the result never leaves the root.
    #[test]
    fn resolution_is_confined(fs in tree_strategy(), input in untrusted_path_strategy()) {
        let resolver = PathResolver::with_filesystem(fs);
        match resolver.resolve(ROOT, &input) {
            Ok(resolved) => {
                assert_confined(resolved.path())?;
                prop_assert!(resolved.links_walked() <= MAX_SYMLINK_LIMIT);
            }
            Err(err) => prop_assert!(err.is_too_many_links(), "unexpected error: {err}"),
        }
    }

    // The observer fires once per expanded link.
    #[test]
    fn observer_fires_once_per_hop(fs in tree_strategy(), input in untrusted_path_strategy()) {
        let resolver = PathResolver::with_filesystem(fs);
        let mut recorder = SymlinkRecorder::new();
        match resolver.resolve_with(ROOT, &input, &mut recorder) {
            Ok(resolved) => prop_assert_eq!(recorder.hops().len(), resolved.links_walked()),
            Err(Error::TooManyLinks { .. }) => {
                prop_assert_eq!(recorder.hops().len(), MAX_SYMLINK_LIMIT);
            }
            Err(err) => prop_assert!(false, "unexpected error: {err}"),
        }
        for hop in recorder.hops() {
            prop_assert!(hop.path.has_root());
        }
    }

    // Resolving an already resolved, symlink-free path changes nothing.
    #[test]
    fn resolution_is_idempotent_on_clean_paths(rel in clean_path_strategy()) {
        let resolver = PathResolver::with_filesystem(MemoryFilesystem::new());
        let once = resolver.resolve(ROOT, &rel).unwrap();
        let again = resolver.resolve(ROOT, once.relative().to_path_buf()).unwrap();
        prop_assert_eq!(once.path(), again.path());
        let expected = Path::new(ROOT).join(&rel);
        prop_assert_eq!(once.path(), expected.as_path());
    }
}

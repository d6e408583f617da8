//! Command to resolve an untrusted path under a root.

use crate::error::CliError;
use crate::utils::{load_configuration, select_root, GlobalOptions};
use clap::{Args, ValueEnum};
use rootpath::observer::{chain, SymlinkHop, SymlinkPolicy, SymlinkRecorder};
use rootpath::{PathResolver, ResolvedPath};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

/// Output format for `resolve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The resolved path on a single line.
    Text,
    /// A JSON object describing the resolution.
    Json,
}

/// Resolve a path under a root directory.
///
/// Symlinks are expanded one hop at a time and can never lead outside the
/// root; `..` stops at the root and absolute link targets are taken relative
/// to it.
#[derive(Args)]
pub struct ResolveCommand {
    /// Untrusted path to resolve
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Trusted root directory (defaults to the configured root)
    #[arg(long, value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Print every symlink hop to stderr
    #[arg(long)]
    pub trace: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct ResolveReport<'a> {
    root: &'a Path,
    input: &'a Path,
    resolved: &'a Path,
    relative: PathBuf,
    links_walked: usize,
    hops: &'a [SymlinkHopReport<'a>],
}

#[derive(Serialize)]
struct SymlinkHopReport<'a> {
    path: &'a Path,
    target: &'a Path,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let root = select_root(self.root.clone(), &config)?;

        let policy = SymlinkPolicy::from_config(&config.policy_or_default());
        let mut observer = chain(policy, SymlinkRecorder::new());

        let result = PathResolver::new().resolve_with(&root, &self.path, &mut observer);
        let (_, recorder) = observer.into_inner();
        let hops = recorder.into_hops();

        // Hops seen before a failure are still worth showing.
        if self.trace && self.format == OutputFormat::Text {
            print_trace(&hops);
        }
        let resolved = result?;

        match self.format {
            OutputFormat::Text => println!("{}", resolved.path().display()),
            OutputFormat::Json => self.print_json(&root, &resolved, &hops)?,
        }

        Ok(())
    }

    fn print_json(
        &self,
        root: &Path,
        resolved: &ResolvedPath,
        hops: &[SymlinkHop],
    ) -> Result<(), CliError> {
        let hops: Vec<_> = hops
            .iter()
            .map(|hop| SymlinkHopReport {
                path: &hop.path,
                target: &hop.target,
            })
            .collect();
        let report = ResolveReport {
            root,
            input: &self.path,
            resolved: resolved.path(),
            relative: resolved.relative().to_path_buf(),
            links_walked: resolved.links_walked(),
            hops: &hops,
        };

        let json = serde_json::to_string_pretty(&report).map_err(io::Error::from)?;
        println!("{json}");
        Ok(())
    }
}

fn print_trace(hops: &[SymlinkHop]) {
    for hop in hops {
        eprintln!("{} -> {}", hop.path.display(), hop.target.display());
    }
}

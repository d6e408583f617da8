//! Build script for rootpath-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("rootpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve untrusted paths under a trusted root")
        .long_about(
            "Resolve paths supplied by an untrusted party to a location guaranteed to lie \
             under a trusted root directory, expanding symlinks without ever leaving the root",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file instead of discovering rootpath.yaml")
                .value_name("PATH")
                .global(true)
                .env("ROOTPATH_CONFIG"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve a path under a root directory")
                .long_about(
                    "Resolve PATH under ROOT (or the configured root), expanding symlinks one \
                     hop at a time and applying the configured symlink policy",
                )
                .arg(Arg::new("path").value_name("PATH").required(true))
                .arg(Arg::new("root").long("root").value_name("ROOT"))
                .arg(
                    Arg::new("trace")
                        .long("trace")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a rootpath configuration file for errors")
                .arg(
                    Arg::new("config_path")
                        .value_name("CONFIG_PATH")
                        .required(true),
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("rootpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}

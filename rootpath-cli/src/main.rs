//! Main entry point for the rootpath CLI.
//!
//! This is the command-line interface for resolving untrusted paths under a
//! trusted root directory. It provides the following commands:
//! - `resolve`: Resolve a path under a root, following symlinks safely
//! - `validate`: Check a configuration file
//! - `completions`: Generate shell completion scripts

use clap::Parser;
use rootpath_cli::cli::{Cli, Command};
use rootpath_cli::utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = rootpath::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Resolve(cmd) => cmd.execute(&global),
        Command::Validate(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

const BIN_NAME: &str = "rootpath";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            print_instructions(self.shell);
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

fn print_instructions(shell: Shell) {
    eprintln!("# Generating {shell} completion script");
    eprintln!("# Run the following command to enable completions:");

    match shell {
        Shell::Bash => {
            eprintln!(
                "#   rootpath completions bash > ~/.local/share/bash-completion/completions/rootpath"
            );
            eprintln!("# Or source it directly in ~/.bashrc:");
            eprintln!("#   eval \"$(rootpath completions bash)\"");
        }
        Shell::Zsh => {
            eprintln!("#   rootpath completions zsh > ~/.zsh/completions/_rootpath");
            eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
        }
        Shell::Fish => {
            eprintln!("#   rootpath completions fish > ~/.config/fish/completions/rootpath.fish");
            eprintln!("# Or add to config.fish:");
            eprintln!("#   rootpath completions fish | source");
        }
        Shell::PowerShell => {
            eprintln!("#   rootpath completions powershell > $PROFILE");
        }
        _ => {}
    }

    eprintln!();
}

// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for Easyfix.
//!
//! Built on clap's derive API. Global flags (output format, quiet,
//! verbose, API root) apply to every subcommand.

use std::io::IsTerminal;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Shell-specific installation examples shown under `completion --help`.
const COMPLETION_HELP: &str = r#"EXAMPLES

  bash
    Add to ~/.bashrc or ~/.bash_profile:
      eval "$(easyfix completion bash)"

  zsh
    Write the completion file:
      mkdir -p ~/.zsh/completions
      easyfix completion zsh > ~/.zsh/completions/_easyfix

    Then in ~/.zshrc (before compinit):
      fpath=(~/.zsh/completions $fpath)
      autoload -U compinit && compinit -i

  fish
    easyfix completion fish > ~/.config/fish/completions/easyfix.fish

  PowerShell
    Add to $PROFILE:
      easyfix completion powershell | Out-String | Invoke-Expression
"#;

/// Output format for CLI results.
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored human-readable text (default)
    #[default]
    Text,
    /// JSON for scripting
    Json,
    /// YAML for scripting
    Yaml,
    /// Markdown suitable for pasting into reports
    Markdown,
}

/// Output settings shared by every command handler.
#[derive(Clone)]
pub struct OutputContext {
    /// Selected output format
    pub format: OutputFormat,
    /// Suppress status lines and spinners
    pub quiet: bool,
    /// Show extra detail in text output
    pub verbose: bool,
    /// Whether stdout is attached to a terminal
    pub is_tty: bool,
}

impl OutputContext {
    /// Builds the context from parsed global flags.
    pub fn from_cli(format: OutputFormat, quiet: bool, verbose: bool) -> Self {
        Self {
            format,
            quiet,
            verbose,
            is_tty: std::io::stdout().is_terminal(),
        }
    }

    /// Whether spinners and prompts are appropriate.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && !self.quiet && matches!(self.format, OutputFormat::Text)
    }
}

/// Easyfix - collect beginner-friendly tickets from GitHub repositories.
///
/// A CLI tool that sweeps configured repositories for open issues carrying
/// an easyfix-style label and reports them per repository.
#[derive(Parser)]
#[command(name = "easyfix")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output format (text, json, yaml, markdown)
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Suppress non-essential output (status lines, spinners)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Verbose output (extra detail plus debug-level logs)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Override the configured GitHub API root (e.g. for GitHub Enterprise)
    #[arg(long, global = true, value_name = "URL")]
    pub api_root: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Collect labeled tickets from configured repositories
    Collect {
        /// Repositories to collect (owner/repo); all configured if omitted
        #[arg(value_name = "REPOSITORY")]
        repositories: Vec<String>,
    },

    /// List configured repositories
    Repos,

    /// Manage GitHub credentials
    #[command(subcommand)]
    Auth(AuthCommand),

    /// Generate shell completion scripts
    #[command(after_long_help = COMPLETION_HELP)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Authentication subcommands
#[derive(Subcommand)]
pub enum AuthCommand {
    /// Store a GitHub API key in the system keyring
    Login,

    /// Remove the API key from the system keyring
    Logout,

    /// Show whether an API key is available and its source
    Status,
}

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `edu` binary.
#[derive(Debug, Parser)]
#[command(
    name = "edu",
    version,
    about = "Educator Copilot - lesson plans, quizzes, and assignments from a topic"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json, raw
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Backend base URL (overrides config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Quiet mode (no spinners, errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            base_url: self.base_url.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

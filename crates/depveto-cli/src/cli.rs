//! CLI argument definitions for depveto.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "depveto",
    version,
    about = "Flag forbidden dependencies in Maven build descriptors",
    long_about = "depveto checks the dependencies declared in a pom.xml against \
                  configured forbidden-dependency rules (coordinate wildcard \
                  patterns plus version ranges) and reports every hit with its \
                  source line."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a build descriptor against forbidden-dependency rules
    Check {
        /// Path to the build descriptor
        #[arg(default_value = "pom.xml")]
        descriptor: PathBuf,

        /// Ruleset TOML file with [[rules]] entries
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Ad-hoc rule: forbidden 'group:artifact' pattern (wildcards via '*')
        #[arg(long, conflicts_with = "rules")]
        deny: Option<String>,

        /// Version range for --deny: blank for all versions, '1.3.*',
        /// '1.0-3.1', '1.0-*' or '*-3.1'
        #[arg(long, requires = "deny", default_value = "")]
        versions: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn parse() -> Cli {
    Cli::parse()
}

//! Command-line interface.

pub mod check;
pub mod completions;
pub mod init;
pub mod output;
pub mod show;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::Settings;
use crate::error::Result;

/// Keyprops - release signing configuration for mobile app builds.
#[derive(Parser)]
#[command(
    name = "keyprops",
    about = "Load key.properties and resolve the release signing profile",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the signing properties file
    #[arg(long, global = true, env = "KEYPROPS_PROPERTIES", value_name = "PATH")]
    pub properties: Option<PathBuf>,

    /// Keystore name used when the properties omit storeFile
    #[arg(
        long,
        global = true,
        env = "KEYPROPS_DEFAULT_STORE_FILE",
        value_name = "NAME"
    )]
    pub default_store_file: Option<String>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Write a key.properties template
    Init {
        /// Overwrite an existing properties file
        #[arg(short, long)]
        force: bool,
        /// Prompt for the keystore values
        #[arg(short, long)]
        interactive: bool,
    },

    /// Print the resolved signing profile
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Print passwords instead of masking them
        #[arg(long)]
        reveal: bool,
    },

    /// Verify every credential is set and the keystore exists
    Check,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    let Cli {
        command,
        properties,
        default_store_file,
        ..
    } = cli;

    let settings =
        || -> Result<Settings> { Settings::load()?.with_overrides(properties, default_store_file) };

    match command {
        Command::Init { force, interactive } => init::execute(&settings()?, force, interactive),
        Command::Show { json, reveal } => show::execute(&settings()?, json, reveal),
        Command::Check => check::execute(&settings()?),
        Command::Completions { shell } => completions::execute(shell),
    }
}

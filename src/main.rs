//! Keyprops - release signing configuration loader.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keyprops::cli::output;
use keyprops::cli::{execute, Cli};
use keyprops::error::{ConfigError, Error, PropertiesError, SigningError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("KEYPROPS_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("keyprops=debug")
        } else {
            EnvFilter::new("keyprops=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Properties(PropertiesError::AlreadyExists(_)) => Some("run: keyprops init --force"),
            Error::Signing(SigningError::Incomplete { .. }) => {
                Some("fill in the missing keys, or run: keyprops init --force --interactive")
            }
            Error::Config(ConfigError::Parse(_) | ConfigError::InvalidValue { .. }) => {
                Some("fix keyprops.toml or remove it to use defaults")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

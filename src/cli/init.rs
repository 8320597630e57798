//! Init command - write a signing properties file.

use dialoguer::{Input, Password};
use std::io::{self, IsTerminal};
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::config::{ensure_gitignore, Settings};
use crate::core::constants::{KEY_ALIAS_KEY, KEY_PASSWORD_KEY, STORE_FILE_KEY, STORE_PASSWORD_KEY};
use crate::core::properties::{self, RawConfig};
use crate::error::Result;

/// Write `key.properties` at the configured path.
///
/// Without `--interactive` (or without a terminal) a template is written
/// that names the default keystore and leaves the credentials commented out.
pub fn execute(settings: &Settings, force: bool, interactive: bool) -> Result<()> {
    let path = &settings.signing.properties;
    info!(path = %path.display(), "initializing signing properties");

    let prompted = interactive && io::stdin().is_terminal();
    if interactive && !prompted {
        output::warn("stdin is not a terminal, writing template instead");
    }

    let contents = if prompted {
        Zeroizing::new(prompt(&settings.signing.default_store_file)?.to_properties_string())
    } else {
        Zeroizing::new(template(&settings.signing.default_store_file))
    };

    properties::write(path, &contents, force)?;
    ensure_gitignore()?;

    output::success(&format!("wrote {}", output::path(path)));
    if !prompted {
        output::hint(&format!(
            "fill in {}, {} and {}",
            output::key(STORE_PASSWORD_KEY),
            output::key(KEY_ALIAS_KEY),
            output::key(KEY_PASSWORD_KEY)
        ));
    }
    Ok(())
}

/// Properties template with the credential keys commented out.
pub fn template(default_store_file: &str) -> String {
    format!(
        "# Release signing configuration.\n\
         # Keep this file out of version control.\n\
         {STORE_FILE_KEY}={default_store_file}\n\
         # {STORE_PASSWORD_KEY}=\n\
         # {KEY_ALIAS_KEY}=\n\
         # {KEY_PASSWORD_KEY}=\n"
    )
}

fn prompt(default_store_file: &str) -> Result<RawConfig> {
    let mut config = RawConfig::new();

    let store_file: String = Input::new()
        .with_prompt("Keystore file")
        .default(default_store_file.to_string())
        .interact_text()?;
    config.insert(STORE_FILE_KEY, store_file);

    let store_password = Password::new()
        .with_prompt("Keystore password")
        .interact()?;
    config.insert(STORE_PASSWORD_KEY, store_password);

    let key_alias: String = Input::new().with_prompt("Key alias").interact_text()?;
    config.insert(KEY_ALIAS_KEY, key_alias);

    let key_password = Password::new()
        .with_prompt("Key password")
        .allow_empty_password(true)
        .interact()?;
    config.insert(KEY_PASSWORD_KEY, key_password);

    Ok(config)
}

//! Show command - print the resolved signing profile.

use tracing::debug;

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::{properties, signing};
use crate::error::Result;

const UNSET: &str = "(unset)";

/// Load, resolve and print the signing profile.
///
/// Passwords are masked unless `reveal` is set. `json` prints the profile
/// with the property key names for consumption by the build.
pub fn execute(settings: &Settings, json: bool, reveal: bool) -> Result<()> {
    let path = &settings.signing.properties;
    let config = properties::load(path)?;
    let profile = signing::resolve(&config, &settings.signing.default_store_file);
    let shown = if reveal {
        profile.clone()
    } else {
        profile.redacted()
    };

    debug!(json, reveal, "showing signing profile");

    if json {
        output::data(&serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    let source = if path.is_file() {
        output::path(path)
    } else {
        format!("{} (not found)", output::path(path))
    };
    let store_note = if signing::configured_store_file(&config).is_some() {
        ""
    } else {
        " (default)"
    };

    output::section("Signing profile");
    output::kv("properties", source);
    output::kv("storeFile", format!("{}{}", shown.store_file(), store_note));
    output::kv(
        "keystore",
        output::path(&shown.store_path(&settings.signing.store_base)),
    );
    output::kv("storePassword", shown.store_password().unwrap_or(UNSET));
    output::kv("keyAlias", shown.key_alias().unwrap_or(UNSET));
    output::kv("keyPassword", shown.key_password().unwrap_or(UNSET));

    if !profile.is_complete() {
        output::warn("credentials missing, release signing will fail");
    }

    Ok(())
}

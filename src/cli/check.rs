//! Check command - verify the signing profile is usable.

use tracing::info;

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::{properties, signing};
use crate::error::Result;

/// Fail unless all credentials are set and the keystore exists.
pub fn execute(settings: &Settings) -> Result<()> {
    let config = properties::load(&settings.signing.properties)?;
    let profile = signing::resolve(&config, &settings.signing.default_store_file);

    for key in profile.missing() {
        output::list_item(&format!("{} not set", output::key(key)));
    }
    profile.check(&settings.signing.store_base)?;

    let store = profile.store_path(&settings.signing.store_base);
    info!(store = %store.display(), "signing profile ready");
    output::success(&format!("ready to sign with {}", output::path(&store)));
    Ok(())
}

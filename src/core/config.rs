//! Settings file management.
//!
//! Reads the optional `keyprops.toml` that locates the signing properties
//! and names the fallback keystore. Every field has a built-in default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Project settings stored in `keyprops.toml`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Signing section
    #[serde(default)]
    pub signing: SigningSettings,
}

/// `[signing]` section of the settings file
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SigningSettings {
    /// Path to the properties file, relative to the project root
    pub properties: PathBuf,
    /// Keystore name used when the properties omit `storeFile`
    pub default_store_file: String,
    /// Directory a relative `storeFile` is resolved against
    pub store_base: PathBuf,
}

impl Default for SigningSettings {
    fn default() -> Self {
        Self {
            properties: PathBuf::from(constants::PROPERTIES_FILE),
            default_store_file: constants::DEFAULT_STORE_FILE.to_string(),
            store_base: PathBuf::from(constants::STORE_BASE_DIR),
        }
    }
}

impl Settings {
    /// Path to the settings file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load settings from `keyprops.toml` in the current directory.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile`, `ConfigError::Parse` or
    /// `ConfigError::InvalidValue`.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading settings");

        if !path.exists() {
            debug!("no settings file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let settings: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        settings.validate()?;

        debug!(
            properties = %settings.signing.properties.display(),
            default_store_file = %settings.signing.default_store_file,
            "settings loaded"
        );
        Ok(settings)
    }

    /// Validate field values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a blank keystore name or an
    /// empty properties path.
    pub fn validate(&self) -> Result<()> {
        if self.signing.default_store_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "signing.default_store_file",
                reason: "must not be blank".to_string(),
            }
            .into());
        }

        if self.signing.properties.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "signing.properties",
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Apply command-line or environment overrides.
    pub fn with_overrides(
        mut self,
        properties: Option<PathBuf>,
        default_store_file: Option<String>,
    ) -> Result<Self> {
        if let Some(properties) = properties {
            self.signing.properties = properties;
        }
        if let Some(name) = default_store_file {
            self.signing.default_store_file = name;
        }
        self.validate()?;
        Ok(self)
    }
}

/// Ensure `.gitignore` contains entries that ignore signing material
///
/// Adds `key.properties`, `*.keystore`, and `*.jks` if not already present.
///
/// # Errors
///
/// Returns error if file operations fail.
pub fn ensure_gitignore() -> Result<()> {
    let gitignore = Path::new(".gitignore");

    let existing = if gitignore.exists() {
        std::fs::read_to_string(gitignore)?
    } else {
        String::new()
    };

    let mut updated = existing.clone();
    for entry in constants::GITIGNORE_ENTRIES {
        if !existing.lines().any(|l| l.trim() == *entry) {
            if !updated.is_empty() && !updated.ends_with('\n') {
                updated.push('\n');
            }
            updated.push_str(entry);
            updated.push('\n');
        }
    }

    if updated != existing {
        debug!("updating .gitignore");
        std::fs::write(gitignore, updated)?;
    }

    Ok(())
}

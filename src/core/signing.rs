//! Release signing profile resolution.
//!
//! Turns loaded properties into the four values the packaging step needs.
//! Resolution never fails: the keystore path falls back to a default name and
//! missing credentials stay `None` for the downstream signer to reject.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::constants::{
    DEFAULT_STORE_FILE, KEY_ALIAS_KEY, KEY_PASSWORD_KEY, STORE_FILE_KEY, STORE_PASSWORD_KEY,
};
use crate::core::properties::RawConfig;
use crate::error::{Result, SigningError};

const MASK: &str = "********";

/// Resolved release signing values.
///
/// Serializes with the property key names (`storeFile`, `storePassword`,
/// `keyAlias`, `keyPassword`). Credentials are wiped on drop.
#[derive(Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct SigningProfile {
    store_file: String,
    store_password: Option<String>,
    key_alias: Option<String>,
    key_password: Option<String>,
}

impl SigningProfile {
    /// Keystore file as configured; never empty.
    pub fn store_file(&self) -> &str {
        &self.store_file
    }

    pub fn store_password(&self) -> Option<&str> {
        self.store_password.as_deref()
    }

    pub fn key_alias(&self) -> Option<&str> {
        self.key_alias.as_deref()
    }

    pub fn key_password(&self) -> Option<&str> {
        self.key_password.as_deref()
    }

    /// Keystore location, with a relative store file joined onto `base`.
    pub fn store_path(&self, base: &Path) -> PathBuf {
        let store = Path::new(&self.store_file);
        if store.is_absolute() {
            store.to_path_buf()
        } else {
            base.join(store)
        }
    }

    /// Credential keys with no configured value, in declaration order.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (STORE_PASSWORD_KEY, &self.store_password),
            (KEY_ALIAS_KEY, &self.key_alias),
            (KEY_PASSWORD_KEY, &self.key_password),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(key, _)| key)
        .collect()
    }

    /// Whether all three credentials are configured.
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Check the profile is usable for signing.
    ///
    /// # Errors
    ///
    /// Returns `SigningError::Incomplete` if any credential is unset, or
    /// `SigningError::StoreFileNotFound` if the keystore does not exist
    /// under `base`.
    pub fn check(&self, base: &Path) -> Result<()> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(SigningError::Incomplete { missing }.into());
        }

        let store = self.store_path(base);
        if !store.is_file() {
            return Err(SigningError::StoreFileNotFound(store).into());
        }

        Ok(())
    }

    /// Copy with passwords replaced by a mask. The key alias is kept.
    pub fn redacted(&self) -> Self {
        Self {
            store_file: self.store_file.clone(),
            store_password: self.store_password.as_ref().map(|_| MASK.to_string()),
            key_alias: self.key_alias.clone(),
            key_password: self.key_password.as_ref().map(|_| MASK.to_string()),
        }
    }
}

impl fmt::Debug for SigningProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = self.redacted();
        f.debug_struct("SigningProfile")
            .field("store_file", &redacted.store_file)
            .field("store_password", &redacted.store_password)
            .field("key_alias", &redacted.key_alias)
            .field("key_password", &redacted.key_password)
            .finish()
    }
}

/// The `storeFile` value `resolve` uses, or `None` when it falls back to a
/// default because the key is absent or blank.
pub fn configured_store_file(config: &RawConfig) -> Option<&str> {
    config
        .get(STORE_FILE_KEY)
        .filter(|value| !value.trim().is_empty())
}

/// Resolve the release signing profile.
///
/// `storeFile` falls back to `default_store_file` when absent or blank, and
/// to the built-in keystore name if that is blank too. The credential keys
/// are taken verbatim and have no default.
pub fn resolve(config: &RawConfig, default_store_file: &str) -> SigningProfile {
    let configured = configured_store_file(config);

    let store_file = configured
        .or_else(|| Some(default_store_file).filter(|value| !value.trim().is_empty()))
        .unwrap_or(DEFAULT_STORE_FILE)
        .to_string();

    let profile = SigningProfile {
        store_file,
        store_password: config.get(STORE_PASSWORD_KEY).map(str::to_string),
        key_alias: config.get(KEY_ALIAS_KEY).map(str::to_string),
        key_password: config.get(KEY_PASSWORD_KEY).map(str::to_string),
    };

    debug!(
        store_file = %profile.store_file,
        defaulted = configured.is_none(),
        missing = ?profile.missing(),
        "signing profile resolved"
    );

    profile
}

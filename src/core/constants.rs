//! Constants used throughout keyprops.
//!
//! Centralizes file names, property keys and defaults.

/// Settings file name (keyprops.toml).
pub const CONFIG_FILE: &str = "keyprops.toml";

/// Signing properties file, relative to the project root.
pub const PROPERTIES_FILE: &str = "android/key.properties";

/// Keystore file name used when the properties do not name one.
pub const DEFAULT_STORE_FILE: &str = "deepocean.keystore";

/// Directory relative store files are resolved against (the app module).
pub const STORE_BASE_DIR: &str = "android/app";

/// Property key for the keystore path.
pub const STORE_FILE_KEY: &str = "storeFile";

/// Property key for the keystore password.
pub const STORE_PASSWORD_KEY: &str = "storePassword";

/// Property key for the signing key alias.
pub const KEY_ALIAS_KEY: &str = "keyAlias";

/// Property key for the signing key password.
pub const KEY_PASSWORD_KEY: &str = "keyPassword";

/// Gitignore entries that keep signing material out of version control.
pub const GITIGNORE_ENTRIES: &[&str] = &["key.properties", "*.keystore", "*.jks"];

//! Test fixtures and constants.

/// Fully populated signing properties.
pub const FULL_PROPERTIES: &str = "\
storeFile=upload.jks
storePassword=store-secret
keyAlias=upload
keyPassword=key-secret
";

/// Properties with comments, blank lines and padding.
pub const COMMENTED_PROPERTIES: &str = r#"
# Release signing
  storeFile = release.keystore

#storePassword=old
keyAlias=release
"#;

/// Properties with a line missing its separator.
pub const MALFORMED_PROPERTIES: &str = "storeFile=a.keystore\nbadline\n";

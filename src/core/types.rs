//! Type aliases for domain concepts.

/// A property key as written in `key.properties` (e.g., storeFile).
pub type PropertyKey = String;

/// A raw property value, kept verbatim after trimming.
pub type PropertyValue = String;

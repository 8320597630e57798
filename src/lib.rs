//! Keyprops - release signing configuration loader for mobile app builds.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Write a key.properties template
//! │   ├── show          # Print the resolved signing profile
//! │   ├── check         # Verify the profile is ready for signing
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # keyprops.toml settings
//!     ├── constants     # File names, property keys, defaults
//!     ├── properties    # key.properties loading and writing
//!     ├── signing       # Signing profile resolution
//!     └── types         # Domain type aliases
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! let config = keyprops::core::load(Path::new("android/key.properties"))?;
//! let profile = keyprops::core::resolve(&config, "deepocean.keystore");
//! println!("signing with {}", profile.store_file());
//! # Ok::<(), keyprops::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

//! Core library components.
//!
//! Loading of signing properties, signing profile resolution, and settings
//! handling. Nothing here talks to a terminal.

pub mod config;
pub mod constants;
pub mod properties;
pub mod signing;
pub mod types;

pub use properties::{load, RawConfig};
pub use signing::{configured_store_file, resolve, SigningProfile};

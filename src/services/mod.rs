//! Data-loading services
//!
//! - Manifest loading and parsing
//! - Control set derivation

pub mod manifest;

pub use manifest::{build_controls, load_manifest};

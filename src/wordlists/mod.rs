//! Word lists for the game
//!
//! Provides the embedded target and dictionary lists, file loading, and the
//! length-bucketed catalogs built from them.

mod catalog;
mod embedded;
pub mod loader;

pub use catalog::{CatalogError, WordCatalog};
pub use embedded::{DICTIONARY, DICTIONARY_COUNT, TARGETS, TARGETS_COUNT};

/// Source name reported for the embedded target list
pub const EMBEDDED_TARGETS: &str = "embedded target list";

/// Source name reported for the embedded dictionary
pub const EMBEDDED_DICTIONARY: &str = "embedded dictionary";

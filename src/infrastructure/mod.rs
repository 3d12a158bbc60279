//! Infrastructure layer: file-system access for configuration data.
//!
//! - [`catalog_loader`] - Reads a JSON catalog override from disk

pub mod catalog_loader;

pub use catalog_loader::load_catalog;

//! Domain layer containing the gift-box model and its configuration tables.
//!
//! # Architecture
//!
//! - [`entities`] - Value records: shapes, dimensions, criteria, platforms
//! - [`catalog`] - Immutable tables injected into the services
//!
//! # Design Principles
//!
//! - The domain layer has no dependencies on the HTTP, web or CLI layers
//! - Nothing here performs I/O except JSON parsing of an in-memory catalog
//! - Business rules live in [`crate::application::services`]

pub mod catalog;
pub mod entities;

pub use catalog::{Catalog, CatalogError};

//! Utility functions shared across layers.
//!
//! - [`query_encoding`] - Percent-encoding of search queries for URL templates

pub mod query_encoding;
